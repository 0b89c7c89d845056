/// UI components for the Atlas web interface

pub mod footer;
pub mod header;
pub mod icons;
pub mod shell;
pub mod sidebar;
