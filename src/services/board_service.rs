// src/services/board_service.rs

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::{
        board::{
            BoardCard, BoardColumn, BoardEffects, BoardOutcome, BoardSnapshot, ColumnDefinition,
            HoverPolicy,
        },
        lead::{CloseType, LeadStatus},
    },
    services::reconciler::BoardReconciler,
};

// Ordem dos locks: reconciliador primeiro, store depois. Ninguém pega o
// reconciliador segurando o store.
#[derive(Clone)]
pub struct BoardService {
    repo: LeadRepository,
    reconciler: Arc<Mutex<BoardReconciler>>,
}

impl BoardService {
    pub fn new(repo: LeadRepository, policy: HoverPolicy) -> Self {
        Self {
            repo,
            reconciler: Arc::new(Mutex::new(BoardReconciler::new(policy))),
        }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn columns(&self) -> Vec<ColumnDefinition> {
        LeadStatus::ALL.into_iter().map(ColumnDefinition::from).collect()
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<BoardSnapshot, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let columns: Vec<BoardColumn> = repo.read(|store| {
                LeadStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let cards: Vec<BoardCard> = store
                            .column(status)
                            .map(|lead| BoardCard {
                                overdue: lead.is_overdue(now),
                                lead: lead.clone(),
                            })
                            .collect();
                        BoardColumn {
                            column: ColumnDefinition::from(status),
                            count: cards.len(),
                            cards,
                        }
                    })
                    .collect()
            })?;

            Ok(BoardSnapshot {
                columns,
                drag: reconciler.phase(),
            })
        })
    }

    // =========================================================================
    //  GESTOS
    // =========================================================================

    pub fn drag_start(&self, lead_id: &str) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let effects = repo.read(|store| reconciler.drag_start(store, lead_id))?;
            tracing::debug!(lead_id, phase = ?reconciler.phase(), "drag iniciado");
            Ok(outcome(reconciler, effects))
        })
    }

    pub fn drag_over(&self, over_id: Option<&str>) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let effects = repo.write(|store| reconciler.drag_over(store, over_id))?;
            log_effects(&effects, "hover");
            Ok(outcome(reconciler, effects))
        })
    }

    pub fn drag_end(&self, over_id: Option<&str>) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let effects = repo.write(|store| reconciler.drag_end(store, over_id))?;
            log_effects(&effects, "drop");
            Ok(outcome(reconciler, effects))
        })
    }

    // =========================================================================
    //  CONFIRMAÇÃO E MUDANÇA DIRETA
    // =========================================================================

    pub fn confirm_close(&self, close_type: CloseType) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let effects = repo.write(|store| reconciler.confirm(store, close_type))?;
            if effects.status_applied.is_some() {
                tracing::info!(?close_type, "🏁 Negócio fechado");
            } else {
                tracing::debug!("confirmação sem pedido pendente ignorada");
            }
            Ok(outcome(reconciler, effects))
        })
    }

    pub fn cancel_close(&self) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, _| {
            if reconciler.cancel() {
                tracing::info!("fechamento cancelado, status mantido");
            }
            Ok(outcome(reconciler, BoardEffects::none()))
        })
    }

    pub fn request_status(&self, lead_id: &str, status: LeadStatus) -> Result<BoardOutcome, AppError> {
        self.with_reconciler(|reconciler, repo| {
            let effects = repo.write(|store| reconciler.request_status(store, lead_id, status))?;
            log_effects(&effects, "status");
            Ok(outcome(reconciler, effects))
        })
    }

    fn with_reconciler<T>(
        &self,
        f: impl FnOnce(&mut BoardReconciler, &LeadRepository) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut reconciler = self
            .reconciler
            .lock()
            .map_err(|_| anyhow::anyhow!("lock do quadro envenenado"))?;
        f(&mut *reconciler, &self.repo)
    }
}

fn outcome(reconciler: &BoardReconciler, effects: BoardEffects) -> BoardOutcome {
    BoardOutcome {
        effects,
        drag: reconciler.phase(),
    }
}

fn log_effects(effects: &BoardEffects, event: &str) {
    if let Some(status) = effects.status_applied {
        tracing::info!(event, %status, "➡️ Lead mudou de coluna");
    }
    if let Some(request) = &effects.confirmation {
        tracing::info!(event, lead_id = %request.lead_id, "⏳ Confirmação de fechamento solicitada");
    }
    if effects.reordered {
        tracing::debug!(event, "card reordenado");
    }
}
