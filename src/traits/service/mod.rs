pub mod index_admin_service_trait;
