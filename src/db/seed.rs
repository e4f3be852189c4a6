// src/db/seed.rs

// Leads de demonstração para subir o quadro já populado (SEED_DEMO_LEADS=true)

use chrono::{Duration, Utc};

use crate::models::{
    lead::{ChatMessage, Lead, LeadComment, LeadStatus, MessageKind, MessageSender, TradeInDetails},
    vehicle::{Vehicle, VehicleStatus},
};

fn message(id: &str, sender: MessageSender, text: &str, timestamp: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        sender,
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        kind: MessageKind::Text,
    }
}

fn base(id: &str, dealership_id: &str, name: &str, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_string(),
        dealership_id: dealership_id.to_string(),
        name: name.to_string(),
        phone: String::new(),
        address: String::new(),
        interested_car: String::new(),
        interested_year: String::new(),
        source: String::new(),
        status,
        trade_in: TradeInDetails::default(),
        appointment_date: None,
        appointment_confirmed: false,
        ai_history: Vec::new(),
        avatar_url: format!(
            "https://picsum.photos/seed/{}/200/200",
            name.split(' ').next().unwrap_or(name).to_lowercase()
        ),
        assigned_seller_id: None,
        interested_vehicle_id: None,
        description: None,
        tags: Vec::new(),
        comments: Vec::new(),
        checklists: Vec::new(),
        value: None,
        last_contact_at: None,
    }
}

pub fn demo_leads(dealership_id: &str) -> Vec<Lead> {
    use MessageSender::{Agent, Lead as FromLead};
    let now = Utc::now();

    let carlos = Lead {
        phone: "(11) 99999-1234".into(),
        address: "Av. Paulista, 1000 - São Paulo, SP".into(),
        interested_car: "Toyota Corolla XEi".into(),
        interested_year: "2022".into(),
        source: "WebMotors".into(),
        ai_history: vec![
            message("m1", Agent, "Olá Carlos, vi que se interessou pelo Corolla 2022. Quer saber das condições de financiamento?", "10:00"),
            message("m2", FromLead, "Sim, qual a taxa para 24x?", "10:05"),
            message("m3", Agent, "Temos taxas a partir de 0.99%. Que tal vir ver pessoalmente hoje às 15h?", "10:06"),
        ],
        tags: vec!["Interessado em Financiamento".into()],
        description: Some("Cliente interessado no Corolla XEi 2022.".into()),
        ..base("1", dealership_id, "Carlos Silva", LeadStatus::InProgress)
    };

    let fernanda = Lead {
        phone: "(21) 98888-5678".into(),
        address: "Rua das Laranjeiras, 50 - Rio de Janeiro, RJ".into(),
        interested_car: "Jeep Compass Longitude".into(),
        interested_year: "2021".into(),
        source: "Instagram".into(),
        // ontem, ainda sem confirmação: aparece como atrasado
        appointment_date: Some(now - Duration::days(1)),
        trade_in: TradeInDetails {
            has_trade_in: true,
            model: "Honda HR-V".into(),
            color: "Prata".into(),
            year: "2018".into(),
            mileage: "58000 km".into(),
        },
        ai_history: vec![
            message("m1", Agent, "Oi Fernanda! Percebi que você tem um HR-V, conseguimos uma avaliação ótima na troca.", "09:00"),
            message("m2", FromLead, "Sério? Quanto vocês pagam no meu?", "09:15"),
            message("m3", Agent, "Posso agendar sua visita para amanhã de manhã?", "09:16"),
            message("m4", FromLead, "Pode ser.", "09:20"),
        ],
        tags: vec!["Troca".into(), "Atrasado".into()],
        comments: vec![LeadComment {
            id: "c1".into(),
            text: "Avaliar HR-V com cuidado.".into(),
            user_name: "Admin".into(),
            created_at: now,
        }],
        description: Some("Cliente possui HR-V 2018 para troca.".into()),
        ..base("2", dealership_id, "Fernanda Lima", LeadStatus::VisitPending)
    };

    let roberto = Lead {
        phone: "(31) 97777-4321".into(),
        address: "Belo Horizonte, MG".into(),
        interested_car: "BMW 320i M Sport".into(),
        interested_year: "2023".into(),
        source: "Indicação".into(),
        appointment_date: Some(now + Duration::days(1)),
        appointment_confirmed: true,
        ai_history: vec![
            message("m1", Agent, "Roberto, a BMW 320i acabou de chegar. Configuração M Sport, Azul Portimão.", "14:00"),
            message("m2", FromLead, "Estou indo aí ver.", "14:02"),
        ],
        tags: vec!["Premium".into(), "BMW".into()],
        description: Some("Cliente buscando BMW 320i M Sport.".into()),
        ..base("3", dealership_id, "Roberto Souza", LeadStatus::Scheduled)
    };

    let ana = Lead {
        phone: "(41) 99111-2233".into(),
        address: "Curitiba, PR".into(),
        interested_car: "Fiat Pulse Audace".into(),
        interested_year: "2024".into(),
        source: "Facebook Ads".into(),
        appointment_confirmed: true,
        ai_history: vec![message("m1", Agent, "Olá Ana, tudo bem? Vi seu interesse no Pulse.", "11:00")],
        tags: vec!["Vendido".into()],
        description: Some("Lead convertido.".into()),
        ..base("4", dealership_id, "Ana Pereira", LeadStatus::Won)
    };

    vec![carlos, fernanda, roberto, ana]
}

fn vehicle(
    dealership_id: &str,
    (id, brand, model, year): (&str, &str, &str, &str),
    price: f64,
    (km, fuel): (&str, &str),
    status: VehicleStatus,
    photo: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        dealership_id: dealership_id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        price,
        km: km.to_string(),
        fuel: fuel.to_string(),
        status,
        image_url: format!("https://images.unsplash.com/{photo}?q=80&w=800&auto=format&fit=crop"),
    }
}

pub fn demo_vehicles(dealership_id: &str) -> Vec<Vehicle> {
    vec![
        vehicle(
            dealership_id,
            ("v1", "Toyota", "Corolla XEi 2.0", "2024"),
            158_900.0,
            ("0km", "Flex"),
            VehicleStatus::Available,
            "photo-1621007947382-bb3c3994e3fb",
        ),
        vehicle(
            dealership_id,
            ("v2", "BMW", "320i M Sport", "2023"),
            320_000.0,
            ("12.000km", "Gasolina"),
            VehicleStatus::Reserved,
            "photo-1555215695-3004980ad54e",
        ),
        vehicle(
            dealership_id,
            ("v3", "Jeep", "Compass Longitude", "2022"),
            145_000.0,
            ("34.500km", "Flex"),
            VehicleStatus::Available,
            "photo-1611016186353-9af58c69a533",
        ),
        vehicle(
            dealership_id,
            ("v4", "Honda", "Civic RS", "2024"),
            265_000.0,
            ("0km", "Híbrido"),
            VehicleStatus::Available,
            "photo-1605816988069-b11c83b40639",
        ),
    ]
}
