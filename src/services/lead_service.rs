// src/services/lead_service.rs

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::lead::{Lead, LeadPatch, MessageKind, MessageSender, NewLead},
};

// Autor usado quando o comentário vem do próprio painel
pub const DEFAULT_COMMENT_AUTHOR: &str = "Você";

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  1. CADASTRO E LEITURA
    // =========================================================================

    pub fn create_lead(&self, data: NewLead) -> Result<String, AppError> {
        let id = self.repo.write(|store| store.create_lead(data))?;
        tracing::info!(lead_id = %id, "✅ Lead criado");
        Ok(id)
    }

    pub fn list_leads(&self) -> Result<Vec<Lead>, AppError> {
        self.repo.read(|store| store.list().to_vec())
    }

    pub fn get_lead(&self, id: &str) -> Result<Lead, AppError> {
        self.repo
            .read(|store| store.get(id).cloned())?
            .ok_or(AppError::LeadNotFound)
    }

    // =========================================================================
    //  2. EDIÇÃO (id desconhecido = no-op silencioso)
    // =========================================================================

    pub fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<(), AppError> {
        let applied = self.repo.write(|store| store.update_lead(id, patch))?;
        log_ignored(applied, id, "update");
        Ok(())
    }

    pub fn append_message(
        &self,
        id: &str,
        sender: MessageSender,
        text: &str,
        kind: MessageKind,
    ) -> Result<(), AppError> {
        let applied = self
            .repo
            .write(|store| store.append_message(id, sender, text, kind))?;
        log_ignored(applied, id, "mensagem");
        Ok(())
    }

    pub fn add_comment(&self, id: &str, text: &str, author: Option<&str>) -> Result<(), AppError> {
        let author = author.unwrap_or(DEFAULT_COMMENT_AUTHOR);
        let applied = self.repo.write(|store| store.add_comment(id, text, author))?;
        log_ignored(applied, id, "comentário");
        Ok(())
    }

    pub fn add_tag(&self, id: &str, tag: &str) -> Result<(), AppError> {
        let applied = self.repo.write(|store| store.add_tag(id, tag))?;
        log_ignored(applied, id, "tag");
        Ok(())
    }

    pub fn remove_tag(&self, id: &str, tag: &str) -> Result<(), AppError> {
        let applied = self.repo.write(|store| store.remove_tag(id, tag))?;
        log_ignored(applied, id, "remover tag");
        Ok(())
    }

    pub fn add_checklist(&self, id: &str, title: &str) -> Result<Option<String>, AppError> {
        let created = self.repo.write(|store| store.add_checklist(id, title))?;
        log_ignored(created.is_some(), id, "checklist");
        Ok(created)
    }

    pub fn add_checklist_item(
        &self,
        id: &str,
        checklist_id: &str,
        content: &str,
    ) -> Result<Option<String>, AppError> {
        let created = self
            .repo
            .write(|store| store.add_checklist_item(id, checklist_id, content))?;
        log_ignored(created.is_some(), id, "item de checklist");
        Ok(created)
    }

    pub fn toggle_checklist_item(
        &self,
        id: &str,
        checklist_id: &str,
        item_id: &str,
    ) -> Result<(), AppError> {
        let applied = self
            .repo
            .write(|store| store.toggle_checklist_item(id, checklist_id, item_id))?;
        log_ignored(applied, id, "toggle checklist");
        Ok(())
    }
}

fn log_ignored(applied: bool, id: &str, operation: &str) {
    if !applied {
        tracing::debug!(lead_id = id, operation, "operação ignorada (lead ou alvo inexistente)");
    }
}
