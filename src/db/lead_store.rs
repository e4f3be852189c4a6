// src/db/lead_store.rs

use chrono::Utc;
use uuid::Uuid;

use crate::models::lead::{
    ChatMessage, Checklist, ChecklistItem, Lead, LeadComment, LeadPatch, LeadStatus,
    MessageKind, MessageSender, NewLead, TradeInDetails,
};

const DEFAULT_DEALERSHIP_ID: &str = "d1";
const DEFAULT_LEAD_NAME: &str = "Novo Lead";
const DEFAULT_SOURCE: &str = "Simulação";

/// Coleção autoritativa de leads, em memória.
///
/// Todas as operações são síncronas e completam de uma vez. Id desconhecido
/// nunca é erro: a operação vira no-op e devolve `false`.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
    default_dealership_id: Option<String>,
}

impl LeadStore {
    pub fn with_dealership(dealership_id: impl Into<String>) -> Self {
        Self {
            leads: Vec::new(),
            default_dealership_id: Some(dealership_id.into()),
        }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn list(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    /// Leads de uma coluna, na ordem do quadro.
    pub fn column(&self, status: LeadStatus) -> impl Iterator<Item = &Lead> {
        self.leads.iter().filter(move |lead| lead.status == status)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    // =========================================================================
    //  OPERAÇÕES DO PIPELINE
    // =========================================================================

    /// Cria o lead no topo da coleção e devolve o id gerado. Nunca falha.
    pub fn create_lead(&mut self, data: NewLead) -> String {
        let id = Uuid::new_v4().to_string();
        // Nome em branco conta como ausente: avatar "new" e nome padrão
        let given_name = data.name.filter(|name| !name.trim().is_empty());
        let avatar_url = avatar_url_for(given_name.as_deref());
        let name = given_name.unwrap_or_else(|| DEFAULT_LEAD_NAME.to_string());

        let dealership_id = data
            .dealership_id
            .or_else(|| self.default_dealership_id.clone())
            .unwrap_or_else(|| DEFAULT_DEALERSHIP_ID.to_string());

        let lead = Lead {
            id: id.clone(),
            dealership_id,
            name,
            phone: data.phone.unwrap_or_default(),
            address: data.address.unwrap_or_default(),
            interested_car: data.interested_car.unwrap_or_default(),
            interested_year: data.interested_year.unwrap_or_default(),
            source: data
                .source
                .filter(|source| !source.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            status: data.status.unwrap_or_default(),
            trade_in: TradeInDetails::default(),
            appointment_date: data.appointment_date,
            appointment_confirmed: false,
            ai_history: Vec::new(),
            avatar_url,
            assigned_seller_id: data.assigned_seller_id,
            interested_vehicle_id: data.interested_vehicle_id,
            description: Some(data.description.unwrap_or_default()),
            tags: Vec::new(),
            comments: Vec::new(),
            checklists: Vec::new(),
            value: data.value,
            last_contact_at: None,
        };

        self.leads.insert(0, lead);
        id
    }

    pub fn update_lead(&mut self, id: &str, patch: LeadPatch) -> bool {
        let Some(lead) = self.find_mut(id) else {
            return false;
        };

        if let Some(name) = patch.name {
            lead.name = name;
        }
        if let Some(phone) = patch.phone {
            lead.phone = phone;
        }
        if let Some(address) = patch.address {
            lead.address = address;
        }
        if let Some(car) = patch.interested_car {
            lead.interested_car = car;
        }
        if let Some(year) = patch.interested_year {
            lead.interested_year = year;
        }
        if let Some(source) = patch.source {
            lead.source = source;
        }
        if let Some(trade_in) = patch.trade_in {
            lead.trade_in = trade_in;
        }
        if let Some(date) = patch.appointment_date {
            lead.appointment_date = date;
        }
        if let Some(confirmed) = patch.appointment_confirmed {
            lead.appointment_confirmed = confirmed;
        }
        if let Some(seller) = patch.assigned_seller_id {
            lead.assigned_seller_id = seller;
        }
        if let Some(vehicle) = patch.interested_vehicle_id {
            lead.interested_vehicle_id = vehicle;
        }
        if let Some(description) = patch.description {
            lead.description = description;
        }
        if let Some(tags) = patch.tags {
            lead.tags = Vec::new();
            for tag in tags {
                push_tag(&mut lead.tags, &tag);
            }
        }
        if let Some(value) = patch.value {
            lead.value = value;
        }
        true
    }

    /// Só troca o status. A posição na coleção não muda.
    pub fn set_status(&mut self, id: &str, status: LeadStatus) -> bool {
        match self.find_mut(id) {
            Some(lead) => {
                lead.status = status;
                true
            }
            None => false,
        }
    }

    /// Move `active_id` para a posição de `over_id` (array-move estável).
    pub fn reorder(&mut self, active_id: &str, over_id: &str) -> bool {
        let old_index = self.position(active_id);
        let new_index = self.position(over_id);

        match (old_index, new_index) {
            (Some(old_index), Some(new_index)) => {
                if old_index != new_index {
                    let lead = self.leads.remove(old_index);
                    self.leads.insert(new_index, lead);
                }
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    //  CONVERSA, COMENTÁRIOS, TAGS E CHECKLISTS
    // =========================================================================

    pub fn append_message(
        &mut self,
        id: &str,
        sender: MessageSender,
        text: &str,
        kind: MessageKind,
    ) -> bool {
        let Some(lead) = self.find_mut(id) else {
            return false;
        };
        let now = Utc::now();
        lead.ai_history.push(ChatMessage {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.to_string(),
            timestamp: now.format("%H:%M").to_string(),
            kind,
        });
        if sender == MessageSender::Lead {
            lead.last_contact_at = Some(now);
        }
        true
    }

    // Comentário novo entra no topo
    pub fn add_comment(&mut self, id: &str, text: &str, author: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let Some(lead) = self.find_mut(id) else {
            return false;
        };
        lead.comments.insert(
            0,
            LeadComment {
                id: Uuid::new_v4().to_string(),
                text: text.to_string(),
                user_name: author.to_string(),
                created_at: Utc::now(),
            },
        );
        true
    }

    pub fn add_tag(&mut self, id: &str, tag: &str) -> bool {
        match self.find_mut(id) {
            Some(lead) => push_tag(&mut lead.tags, tag),
            None => false,
        }
    }

    pub fn remove_tag(&mut self, id: &str, tag: &str) -> bool {
        let Some(lead) = self.find_mut(id) else {
            return false;
        };
        let before = lead.tags.len();
        lead.tags.retain(|existing| existing != tag);
        lead.tags.len() != before
    }

    /// Devolve o id do checklist criado.
    pub fn add_checklist(&mut self, id: &str, title: &str) -> Option<String> {
        let lead = self.find_mut(id)?;
        let checklist_id = Uuid::new_v4().to_string();
        lead.checklists.push(Checklist {
            id: checklist_id.clone(),
            title: title.to_string(),
            items: Vec::new(),
        });
        Some(checklist_id)
    }

    pub fn add_checklist_item(
        &mut self,
        id: &str,
        checklist_id: &str,
        content: &str,
    ) -> Option<String> {
        let checklist = self
            .find_mut(id)?
            .checklists
            .iter_mut()
            .find(|checklist| checklist.id == checklist_id)?;
        let item_id = Uuid::new_v4().to_string();
        checklist.items.push(ChecklistItem {
            id: item_id.clone(),
            content: content.to_string(),
            is_completed: false,
        });
        Some(item_id)
    }

    pub fn toggle_checklist_item(&mut self, id: &str, checklist_id: &str, item_id: &str) -> bool {
        let item = self
            .find_mut(id)
            .and_then(|lead| lead.checklists.iter_mut().find(|c| c.id == checklist_id))
            .and_then(|checklist| checklist.items.iter_mut().find(|i| i.id == item_id));

        match item {
            Some(item) => {
                item.is_completed = !item.is_completed;
                true
            }
            None => false,
        }
    }

    /// Substitui a coleção inteira (dados de demonstração).
    pub fn seed(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
    }

    // --- helpers ---

    fn position(&self, id: &str) -> Option<usize> {
        self.leads.iter().position(|lead| lead.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Lead> {
        self.leads.iter_mut().find(|lead| lead.id == id)
    }
}

fn push_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|existing| existing == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

fn avatar_url_for(name: Option<&str>) -> String {
    let seed = name.map_or_else(|| "new".to_string(), |name| name.replacen(' ', "", 1));
    format!("https://picsum.photos/seed/{seed}/200/200")
}
