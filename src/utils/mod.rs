/// Módulo encargado de registrar eventos en un archivo de log.
///
/// Implementa la escritura de líneas con timestamp y la resolución de la
/// ruta del archivo a partir de la configuración.
pub mod logger;
