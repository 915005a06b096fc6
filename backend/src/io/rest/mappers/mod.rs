pub mod reservation_mapper;
pub mod selection_mapper;
