mod loader;

pub use loader::TomlSettingsLoader;
