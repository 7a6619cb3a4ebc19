pub mod fuel_record;
pub mod metrics;
