// Утилиты

pub mod encoding;
