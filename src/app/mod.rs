pub mod catalogue_init;

pub use catalogue_init::initialize_catalogue;
