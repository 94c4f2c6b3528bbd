pub mod marker_registry;

pub use marker_registry::{
    ConstantLabel, ExtractionStrategy, MarkerRegistry, ModuleSystemStrategy, VersionedLabel,
    JBOSS_MODULE_MARKER, MODULE_PATH_PROPERTY, QUARKUS_MARKER, SERVER_HOME_PROPERTY,
    SPRING_BOOT_MARKER, TOMCAT_ARCHIVE_MARKER,
};
