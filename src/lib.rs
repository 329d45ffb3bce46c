pub mod integrity_core;
