// src/services/reconciler.rs

//! Máquina de estados do arraste no quadro Kanban.
//!
//! `Idle -> Dragging -> (Idle | PendingConfirmation)`. Os eventos de gesto
//! (start, over, end) chegam em sequência e cada um vira, no máximo, uma
//! chamada ao [`LeadStore`]. Entrar em `WON` nunca é aplicado direto: fica
//! pendente até alguém escolher o tipo de fechamento ou cancelar.

use crate::{
    db::LeadStore,
    models::{
        board::{BoardEffects, DragPhase, HoverPolicy},
        lead::{CloseType, LeadStatus},
    },
};

/// Traduz o alvo do hover/drop para um status.
///
/// Id de coluna vence; depois, card de outro lead assume o status desse lead.
/// Qualquer outra coisa (fora das colunas, id desconhecido) não resolve.
pub fn resolve_target_status(store: &LeadStore, over_id: &str) -> Option<LeadStatus> {
    LeadStatus::from_column_id(over_id).or_else(|| store.get(over_id).map(|lead| lead.status))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging {
        lead_id: String,
        // só usado com HoverPolicy::Deferred
        buffered: Option<LeadStatus>,
    },
    PendingConfirmation {
        lead_id: String,
        // o ponteiro ainda não soltou o card
        dragging: bool,
    },
}

#[derive(Debug, Clone)]
pub struct BoardReconciler {
    policy: HoverPolicy,
    state: DragState,
}

impl Default for BoardReconciler {
    fn default() -> Self {
        Self::new(HoverPolicy::default())
    }
}

impl BoardReconciler {
    pub fn new(policy: HoverPolicy) -> Self {
        Self {
            policy,
            state: DragState::Idle,
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging { lead_id, .. } => DragPhase::Dragging {
                lead_id: lead_id.clone(),
            },
            DragState::PendingConfirmation { lead_id, .. } => DragPhase::PendingConfirmation {
                lead_id: lead_id.clone(),
            },
        }
    }

    // =========================================================================
    //  GESTOS
    // =========================================================================

    pub fn drag_start(&mut self, store: &LeadStore, lead_id: &str) -> BoardEffects {
        // Diálogo de fechamento aberto bloqueia o quadro
        if matches!(self.state, DragState::PendingConfirmation { .. }) {
            return BoardEffects::none();
        }

        self.state = if store.get(lead_id).is_some() {
            DragState::Dragging {
                lead_id: lead_id.to_string(),
                buffered: None,
            }
        } else {
            DragState::Idle
        };
        BoardEffects::none()
    }

    pub fn drag_over(&mut self, store: &mut LeadStore, over_id: Option<&str>) -> BoardEffects {
        let DragState::Dragging { lead_id, buffered } = &mut self.state else {
            return BoardEffects::none();
        };
        let Some(target) = over_id.and_then(|id| resolve_target_status(store, id)) else {
            return BoardEffects::none();
        };

        match self.policy {
            HoverPolicy::Deferred => {
                *buffered = Some(target);
                BoardEffects::none()
            }
            HoverPolicy::Optimistic => {
                let lead_id = lead_id.clone();
                self.transition(store, &lead_id, target, true)
            }
        }
    }

    pub fn drag_end(&mut self, store: &mut LeadStore, over_id: Option<&str>) -> BoardEffects {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { lead_id, buffered } => {
                let mut effects = match self.policy {
                    HoverPolicy::Optimistic => BoardEffects::none(),
                    HoverPolicy::Deferred => {
                        let target = over_id
                            .and_then(|id| resolve_target_status(store, id))
                            .or(buffered);
                        match target {
                            Some(target) => self.transition(store, &lead_id, target, false),
                            None => BoardEffects::none(),
                        }
                    }
                };
                effects.reordered = reorder_on_drop(store, &lead_id, over_id);
                effects
            }
            DragState::PendingConfirmation { lead_id, dragging } => {
                let reordered = dragging && reorder_on_drop(store, &lead_id, over_id);
                self.state = DragState::PendingConfirmation {
                    lead_id,
                    dragging: false,
                };
                BoardEffects {
                    reordered,
                    ..BoardEffects::none()
                }
            }
            DragState::Idle => BoardEffects::none(),
        }
    }

    // =========================================================================
    //  CONFIRMAÇÃO DE FECHAMENTO
    // =========================================================================

    pub fn confirm(&mut self, store: &mut LeadStore, close_type: CloseType) -> BoardEffects {
        let DragState::PendingConfirmation { lead_id, .. } = &self.state else {
            return BoardEffects::none();
        };

        let applied = store.set_status(lead_id, LeadStatus::Won);
        self.state = DragState::Idle;

        BoardEffects {
            status_applied: applied.then_some(LeadStatus::Won),
            close_type: Some(close_type),
            ..BoardEffects::none()
        }
    }

    /// Fecha o diálogo sem aplicar nada. Devolve `false` se não havia pendência.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, DragState::PendingConfirmation { .. }) {
            self.state = DragState::Idle;
            true
        } else {
            false
        }
    }

    /// Mudança de coluna fora do arraste (seletor de status, drop direto na coluna).
    /// Só vale com o quadro parado.
    pub fn request_status(
        &mut self,
        store: &mut LeadStore,
        lead_id: &str,
        status: LeadStatus,
    ) -> BoardEffects {
        if self.state != DragState::Idle {
            return BoardEffects::none();
        }
        self.transition(store, lead_id, status, false)
    }

    // Aplica `target` ou, se for WON, abre a confirmação.
    fn transition(
        &mut self,
        store: &mut LeadStore,
        lead_id: &str,
        target: LeadStatus,
        dragging: bool,
    ) -> BoardEffects {
        let Some(current) = store.get(lead_id).map(|lead| lead.status) else {
            return BoardEffects::none();
        };
        if current == target {
            return BoardEffects::none();
        }

        if target == LeadStatus::Won {
            self.state = DragState::PendingConfirmation {
                lead_id: lead_id.to_string(),
                dragging,
            };
            return BoardEffects::confirmation(lead_id);
        }

        store.set_status(lead_id, target);
        BoardEffects::applied(target)
    }
}

fn reorder_on_drop(store: &mut LeadStore, lead_id: &str, over_id: Option<&str>) -> bool {
    match over_id {
        Some(over_id) if over_id != lead_id => store.reorder(lead_id, over_id),
        _ => false,
    }
}
