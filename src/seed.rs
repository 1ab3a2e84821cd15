//! Demo dataset - seeded farrowing house fleet
//!
//! Builds the dashboard fixture through the public constructors so
//! every load-time integrity check runs on it.

use crate::camera_registry::{Camera, CameraId, HealthStatus};
use crate::connection_monitor::{ConnectionSample, NetworkInfo};
use crate::error::Result;
use crate::event_ledger::{EventKind, NewPenEvent};
use crate::notification_feed::{Notification, Severity};
use crate::state::{AppConfig, AppState};

const PEN_SNAPSHOT_1: &str = "https://images.unsplash.com/photo-1762655338189-58dd9a5bea18?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=800";
const PEN_SNAPSHOT_2: &str = "https://images.unsplash.com/photo-1663784294206-9b508132baf9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=800";
const PEN_SNAPSHOT_3: &str = "https://images.unsplash.com/photo-1757323148943-2ae82a19ec9f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=800";

/// Build the seeded demo fleet
///
/// Events are recorded oldest first so per-camera queries read newest
/// first.
pub fn demo_state(config: AppConfig) -> Result<AppState> {
    let state = AppState::new(
        config,
        cameras(),
        connection_samples(),
        network_info(),
        notifications(),
    )?;

    for event in events() {
        state.events.record(event)?;
    }

    tracing::info!(
        camera_count = state.registry.len(),
        event_count = state.events.total_count(),
        notification_count = state.notifications.len(),
        "Demo fleet seeded"
    );
    Ok(state)
}

fn camera(
    id: CameraId,
    name: &str,
    status: HealthStatus,
    last_activity: &str,
    snapshot_url: &str,
) -> Camera {
    Camera {
        id,
        name: name.to_string(),
        status,
        last_activity: Some(last_activity.to_string()),
        snapshot_url: Some(snapshot_url.to_string()),
    }
}

fn cameras() -> Vec<Camera> {
    vec![
        camera(
            1,
            "Câmera 1 - Baia A",
            HealthStatus::Active,
            "Última atividade: Há 10 min",
            PEN_SNAPSHOT_1,
        ),
        camera(
            2,
            "Câmera 2 - Baia B",
            HealthStatus::Active,
            "Última atividade: Há 25 min",
            PEN_SNAPSHOT_2,
        ),
        camera(
            3,
            "Câmera 3 - Baia C",
            HealthStatus::Alerting,
            "⚠️ Atividade detectada agora",
            PEN_SNAPSHOT_3,
        ),
        camera(
            4,
            "Câmera 4 - Baia D",
            HealthStatus::Active,
            "Última atividade: Há 1 hora",
            PEN_SNAPSHOT_1,
        ),
        camera(
            5,
            "Câmera 5 - Baia E",
            HealthStatus::Alerting,
            "⚠️ Temperatura elevada",
            PEN_SNAPSHOT_2,
        ),
        camera(
            6,
            "Câmera 6 - Baia F",
            HealthStatus::Inactive,
            "❌ Sem conexão - Verificar câmera",
            PEN_SNAPSHOT_3,
        ),
        camera(
            7,
            "Câmera 7 - Baia G",
            HealthStatus::Active,
            "Última atividade: Há 2 horas",
            PEN_SNAPSHOT_1,
        ),
    ]
}

fn sample(camera_id: CameraId, signal_strength: u8, latency_ms: u32) -> ConnectionSample {
    ConnectionSample {
        camera_id,
        signal_strength,
        latency_ms,
    }
}

fn connection_samples() -> Vec<ConnectionSample> {
    vec![
        sample(1, 95, 12),
        sample(2, 88, 18),
        sample(3, 92, 15),
        sample(4, 45, 65),
        sample(5, 90, 14),
        sample(6, 87, 20),
        sample(7, 93, 11),
    ]
}

fn network_info() -> NetworkInfo {
    NetworkInfo {
        ip_address: "192.168.1.100".to_string(),
        network_name: "Maternidade_Fazenda".to_string(),
        bandwidth_mbps: 100,
    }
}

fn birth(camera_id: CameraId, description: &str, timestamp: &str, piglets: u32) -> NewPenEvent {
    NewPenEvent {
        camera_id,
        kind: EventKind::Birth,
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        piglet_count: Some(piglets),
    }
}

fn incident(
    camera_id: CameraId,
    kind: EventKind,
    description: &str,
    timestamp: &str,
) -> NewPenEvent {
    NewPenEvent {
        camera_id,
        kind,
        description: description.to_string(),
        timestamp: timestamp.to_string(),
        piglet_count: None,
    }
}

fn events() -> Vec<NewPenEvent> {
    vec![
        birth(6, "2 leitões nascidos", "Ontem, 14:00", 2),
        birth(6, "5 leitões nascidos", "Ontem, 16:20", 5),
        birth(5, "Leitão nascido com sucesso", "Ontem, 18:45", 1),
        birth(7, "Leitão nascido com sucesso", "Ontem, 19:15", 1),
        incident(
            4,
            EventKind::Death,
            "Leitão sem sinais vitais detectado",
            "Ontem, 20:30",
        ),
        birth(4, "4 leitões nascidos", "Ontem, 22:15", 4),
        incident(
            7,
            EventKind::CrushRisk,
            "Risco de esmagamento identificado",
            "Ontem, 23:30",
        ),
        birth(3, "Leitão nascido com sucesso", "Hoje, 10:30", 1),
        birth(1, "Leitão nascido com sucesso", "Hoje, 11:20", 1),
        birth(2, "3 leitões nascidos", "Hoje, 12:45", 3),
        birth(1, "2 leitões nascidos", "Hoje, 13:15", 2),
        birth(1, "Leitão nascido com sucesso", "Hoje, 14:30", 1),
        incident(
            3,
            EventKind::CrushRisk,
            "Alerta de esmagamento detectado - Intervenção necessária",
            "Hoje, 15:10",
        ),
    ]
}

fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            severity: Severity::Alert,
            title: "Atividade Detectada - Possível Nascimento".to_string(),
            description: "Movimento intenso detectado na baia. Recomenda-se verificação imediata."
                .to_string(),
            camera_id: Some(3),
            timestamp: "Há 5 minutos".to_string(),
        },
        Notification {
            id: 2,
            severity: Severity::Success,
            title: "Nascimento Confirmado".to_string(),
            description: "Leitão nascido com sucesso. Total de 8 leitões nesta ninhada."
                .to_string(),
            camera_id: Some(1),
            timestamp: "Há 1 hora".to_string(),
        },
        Notification {
            id: 3,
            severity: Severity::Alert,
            title: "Temperatura Elevada".to_string(),
            description:
                "Temperatura ambiente acima do ideal na baia. Verificar sistema de climatização."
                    .to_string(),
            camera_id: Some(5),
            timestamp: "Há 2 horas".to_string(),
        },
        Notification {
            id: 4,
            severity: Severity::Info,
            title: "Manutenção Programada".to_string(),
            description: "Limpeza e verificação das câmeras agendada para amanhã às 08:00."
                .to_string(),
            camera_id: None,
            timestamp: "Hoje, 10:30".to_string(),
        },
        Notification {
            id: 5,
            severity: Severity::Success,
            title: "Sistema Online".to_string(),
            description:
                "Todas as câmeras estão funcionando normalmente. Última verificação concluída."
                    .to_string(),
            camera_id: None,
            timestamp: "Há 3 horas".to_string(),
        },
        Notification {
            id: 6,
            severity: Severity::Alert,
            title: "Porca Agitada".to_string(),
            description: "Comportamento anormal detectado. Possível início de trabalho de parto."
                .to_string(),
            camera_id: Some(7),
            timestamp: "Há 4 horas".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AppState {
        demo_state(AppConfig {
            event_capacity: 100,
            recent_events_limit: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_demo_fleet_counts() {
        let state = seeded();
        let summary = state.fleet_summary();

        assert_eq!(summary.total_cameras, 7);
        assert_eq!(summary.status.active, 4);
        assert_eq!(summary.status.alerting, 2);
        assert_eq!(summary.status.inactive, 1);

        // Camera 4's 45% signal derives offline; classification is
        // never taken from a stored label.
        assert_eq!(summary.connectivity.online, 6);
        assert_eq!(summary.connectivity.weak, 0);
        assert_eq!(summary.connectivity.offline, 1);
        assert_eq!(summary.connectivity.average_signal, 84);

        assert_eq!(summary.total_events, 13);
        assert_eq!(summary.event_kinds.births, 10);
        assert_eq!(summary.event_kinds.deaths, 1);
        assert_eq!(summary.event_kinds.crush_risks, 2);
        assert_eq!(summary.piglets_born, 21);
    }

    #[test]
    fn test_demo_events_read_newest_first() {
        let state = seeded();
        let events = state.events.events_for(1).unwrap();
        let timestamps: Vec<&str> = events.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(timestamps, vec!["Hoje, 14:30", "Hoje, 13:15", "Hoje, 11:20"]);
    }

    #[test]
    fn test_demo_notification_counts() {
        let state = seeded();
        let counts = state.notifications.count_by_severity();
        assert_eq!(counts.alert, 3);
        assert_eq!(counts.success, 2);
        assert_eq!(counts.info, 1);
    }
}
