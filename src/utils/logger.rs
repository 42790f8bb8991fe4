use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;

/// Ruta de log usada cuando no hay configuración disponible.
const DEFAULT_LOG_PATH: &str = "logs/keyslot.log";

/// Agrega una línea con timestamp al archivo de log.
///
/// Crea el directorio padre si no existe. Los errores de escritura se
/// informan por stderr y nunca interrumpen al llamador.
pub fn log_event(log_path: &str, message: &str) {
    let now = Local::now().format("[%Y-%m-%d %H:%M:%S]");
    let log_line = format!("{} {}\n", now, message);

    if let Some(log_dir) = Path::new(log_path).parent() {
        if !log_dir.as_os_str().is_empty() {
            if let Err(e) = create_dir_all(log_dir) {
                eprintln!("Error creando directorio de logs: {}", e);
            }
        }
    }

    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(log_line.as_bytes()) {
                eprintln!("Error escribiendo en el log: {}", e);
            }
        }
        Err(e) => eprintln!("Error abriendo archivo de log {}: {}", log_path, e),
    }
}

/// Obtiene la ruta del archivo de log.
///
/// La variable de entorno `LOG_FILE` tiene prioridad; si no está definida se
/// busca la clave `log_path=` en el archivo de configuración. Si el archivo
/// no existe o no contiene la clave, se usa la ruta por defecto.
pub fn get_log_path_from_config(config_path: &str) -> String {
    if let Ok(env_path) = std::env::var("LOG_FILE") {
        return env_path;
    }

    let config = std::fs::read_to_string(config_path).unwrap_or_default();
    for line in config.lines() {
        if let Some(path) = line.strip_prefix("log_path=") {
            return path.trim().to_string();
        }
    }

    DEFAULT_LOG_PATH.to_string()
}
