use tokio::sync::RwLock;

use crate::models::{AppointmentRecord, AppointmentStatus};

/// Message returned with every confirmed booking
pub const BOOKING_CONFIRMATION: &str = "Agendado com sucesso!";

/// In-memory appointment list, lost on restart
#[derive(Debug, Default)]
pub struct AppointmentBook {
    appointments: RwLock<Vec<AppointmentRecord>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmed appointment
    ///
    /// The specialist name is stored as given; it is not checked against the
    /// directory.
    pub async fn book(&self, date: &str, time: &str, specialist: &str) -> AppointmentRecord {
        let appointment = AppointmentRecord {
            id: uuid::Uuid::new_v4(),
            date: date.to_string(),
            time: time.to_string(),
            specialist: specialist.to_string(),
            status: AppointmentStatus::Confirmed,
            created_at: chrono::Utc::now(),
        };

        self.appointments.write().await.push(appointment.clone());
        tracing::info!(
            "Booked appointment {} with {} on {} at {}",
            appointment.id,
            appointment.specialist,
            appointment.date,
            appointment.time
        );

        appointment
    }

    /// All appointments in booking order
    pub async fn list(&self) -> Vec<AppointmentRecord> {
        self.appointments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }
}
