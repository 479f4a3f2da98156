/// Bean container snapshots loaded from manifest files
mod toml_manifest;

pub use toml_manifest::TomlManifestContainer;
