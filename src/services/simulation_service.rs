// src/services/simulation_service.rs

use std::time::Duration;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::lead::{LeadStatus, NewLead},
};

pub const SIMULATION_SOURCE: &str = "IA Simulation";

// Entrada simulada: o "agente" qualifica o lead e, depois de um tempo,
// marca a visita (ATENDIMENTO -> AGENDAMENTO).
#[derive(Clone)]
pub struct SimulationService {
    repo: LeadRepository,
    step_delay: Duration,
}

impl SimulationService {
    pub fn new(repo: LeadRepository, step_delay: Duration) -> Self {
        Self { repo, step_delay }
    }

    /// Cria o lead e devolve o id na hora. O avanço de etapa roda em background.
    pub fn start_intake(&self, name: &str, phone: &str, car: &str) -> Result<String, AppError> {
        let id = self.repo.write(|store| {
            store.create_lead(NewLead {
                name: Some(name.to_string()),
                phone: Some(phone.to_string()),
                interested_car: Some(car.to_string()),
                status: Some(LeadStatus::InProgress),
                source: Some(SIMULATION_SOURCE.to_string()),
                ..NewLead::default()
            })
        })?;
        tracing::info!(lead_id = %id, "🤖 Simulação de atendimento iniciada");

        let repo = self.repo.clone();
        let delay = self.step_delay;
        let lead_id = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Só avança se ninguém mexeu no lead enquanto isso (ex: fechado como WON)
            let advanced = repo.write(|store| {
                let still_in_progress = store
                    .get(&lead_id)
                    .is_some_and(|lead| lead.status == LeadStatus::InProgress);
                still_in_progress && store.set_status(&lead_id, LeadStatus::Scheduled)
            });
            match advanced {
                Ok(true) => tracing::info!(%lead_id, "📅 Simulação agendou a visita"),
                Ok(false) => tracing::debug!(%lead_id, "lead da simulação já saiu do atendimento"),
                Err(e) => tracing::error!("Falha ao avançar simulação: {}", e),
            }
        });

        Ok(id)
    }
}
