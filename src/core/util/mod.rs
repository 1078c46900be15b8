pub mod plane_mapping;
