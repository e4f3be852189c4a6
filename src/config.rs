// src/config.rs

use anyhow::Context;
use std::{env, str::FromStr, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{seed, LeadRepository, LeadStore, VehicleRepository, VehicleStore},
    models::board::HoverPolicy,
    services::{
        board_service::BoardService, lead_service::LeadService,
        simulation_service::SimulationService, vehicle_service::VehicleService,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub hover_policy: HoverPolicy,
    pub seed_demo_leads: bool,
    pub simulation_delay: Duration,
    pub default_dealership_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            hover_policy: HoverPolicy::Optimistic,
            seed_demo_leads: false,
            simulation_delay: Duration::from_millis(1500),
            default_dealership_id: "d1".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para os testes não mexerem no ambiente do processo
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let delay_ms: Option<u64> = parse_var(&lookup, "SIMULATION_DELAY_MS")?;
        let hover_policy = match lookup("BOARD_HOVER_POLICY") {
            Some(raw) => raw
                .parse::<HoverPolicy>()
                .map_err(|e| anyhow::anyhow!("BOARD_HOVER_POLICY inválida: {e}"))?,
            None => defaults.hover_policy,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "APP_PORT")?.unwrap_or(defaults.port),
            hover_policy,
            seed_demo_leads: parse_var(&lookup, "SEED_DEMO_LEADS")?
                .unwrap_or(defaults.seed_demo_leads),
            simulation_delay: delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulation_delay),
            default_dealership_id: lookup("DEFAULT_DEALERSHIP_ID")
                .unwrap_or(defaults.default_dealership_id),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{key} inválido: '{raw}'"))
        })
        .transpose()
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub i18n_store: I18nStore,
    pub lead_service: LeadService,
    pub board_service: BoardService,
    pub simulation_service: SimulationService,
    pub vehicle_service: VehicleService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dealership_id = config.default_dealership_id.as_str();
        let mut store = LeadStore::with_dealership(dealership_id);
        let mut stock = VehicleStore::with_dealership(dealership_id);
        if config.seed_demo_leads {
            store.seed(seed::demo_leads(dealership_id));
            stock.seed(seed::demo_vehicles(dealership_id));
            tracing::info!("🌱 {} leads de demonstração carregados", store.len());
        }

        // --- Monta o gráfico de dependências ---
        let repo = LeadRepository::new(store);
        let lead_service = LeadService::new(repo.clone());
        let board_service = BoardService::new(repo.clone(), config.hover_policy);
        let simulation_service = SimulationService::new(repo, config.simulation_delay);
        let vehicle_service = VehicleService::new(VehicleRepository::new(stock));

        Self {
            config,
            i18n_store: I18nStore::new(),
            lead_service,
            board_service,
            simulation_service,
            vehicle_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8080"),
            ("BOARD_HOVER_POLICY", "deferred"),
            ("SEED_DEMO_LEADS", "true"),
            ("SIMULATION_DELAY_MS", "200"),
            ("DEFAULT_DEALERSHIP_ID", "loja-sp"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.hover_policy, HoverPolicy::Deferred);
        assert!(config.seed_demo_leads);
        assert_eq!(config.simulation_delay, Duration::from_millis(200));
        assert_eq!(config.default_dealership_id, "loja-sp");
    }

    #[test]
    fn invalid_values_fail_with_the_variable_name() {
        let err = Config::from_lookup(lookup_from(&[("APP_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));

        let err = Config::from_lookup(lookup_from(&[("BOARD_HOVER_POLICY", "eager")])).unwrap_err();
        assert!(err.to_string().contains("BOARD_HOVER_POLICY"));

        assert!(Config::from_lookup(lookup_from(&[("SEED_DEMO_LEADS", "sim")])).is_err());
    }

    #[test]
    fn state_seeds_demo_leads_on_request() {
        let config = Config {
            seed_demo_leads: true,
            ..Config::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.lead_service.list_leads().unwrap().len(), 4);
        assert_eq!(state.vehicle_service.list_vehicles(None).unwrap().len(), 4);

        let empty = AppState::new(Config::default());
        assert!(empty.lead_service.list_leads().unwrap().is_empty());
    }
}
