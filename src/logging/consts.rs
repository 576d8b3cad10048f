pub const DEFAULT_LOG_DIRECTIVE: &str = "kotla_server=info";
