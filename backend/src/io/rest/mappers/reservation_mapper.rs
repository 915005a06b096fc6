//! backend/src/io/rest/mappers/reservation_mapper.rs

use super::selection_mapper::format_timestamp;
use crate::domain::models::Reservation as DomainReservation;
use shared::{CreateReservationResponse, Reservation as SharedReservation, ReservationListResponse};

/// Mapper from domain reservations to shared DTOs.
pub struct ReservationMapper;

impl ReservationMapper {
    pub fn to_dto(domain: DomainReservation) -> SharedReservation {
        SharedReservation {
            start: format_timestamp(&domain.start),
            end: format_timestamp(&domain.end),
            id: domain.id,
            title: domain.title,
            resource_id: domain.resource_id,
            practitioner_name: domain.practitioner_name,
            frequency: domain.frequency,
        }
    }

    pub fn to_list_response(domain_reservations: Vec<DomainReservation>) -> ReservationListResponse {
        ReservationListResponse {
            reservations: domain_reservations.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_response(domain: DomainReservation, room_title: &str) -> CreateReservationResponse {
        let success_message = format!(
            "{} booked for {} on {}",
            room_title,
            domain.practitioner_name,
            domain.start.format("%d/%m/%Y %H:%M")
        );
        CreateReservationResponse {
            reservation: Self::to_dto(domain),
            success_message,
        }
    }
}
