// src/db/repository.rs

use std::sync::{Arc, RwLock};

use crate::{
    common::error::AppError,
    db::{LeadStore, VehicleStore},
};

// Handle clonável para um store em memória, do mesmo jeito que os repositórios
// carregam o pool. Cada operação roda inteira sob o lock.
pub struct Repository<S> {
    store: Arc<RwLock<S>>,
}

pub type LeadRepository = Repository<LeadStore>;
pub type VehicleRepository = Repository<VehicleStore>;

// Manual: o derive exigiria `S: Clone`, e o que se clona é só o Arc
impl<S> Clone for Repository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Default> Default for Repository<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Repository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> Result<T, AppError> {
        let guard = self
            .store
            .read()
            .map_err(|_| anyhow::anyhow!("lock do store envenenado"))?;
        Ok(f(&guard))
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut S) -> T) -> Result<T, AppError> {
        let mut guard = self
            .store
            .write()
            .map_err(|_| anyhow::anyhow!("lock do store envenenado"))?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::{LeadStatus, NewLead};

    #[test]
    fn clones_share_the_same_collection() {
        let repo = LeadRepository::default();
        let other = repo.clone();

        let id = repo.write(|store| store.create_lead(NewLead::default())).unwrap();
        other.write(|store| store.set_status(&id, LeadStatus::Lost)).unwrap();

        let status = repo.read(|store| store.get(&id).map(|lead| lead.status)).unwrap();
        assert_eq!(status, Some(LeadStatus::Lost));
    }
}
