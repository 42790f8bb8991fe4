use std::env::args;

use rusty_slots::hash_tag::get_effective_key;
use rusty_slots::slot::get_hash_slots;
use rusty_slots::utils::logger;

/// Número mínimo de argumentos esperados
static REQUIRED_ARGS: usize = 2;

/// Calcula el slot de Redis Cluster de cada clave recibida.
///
/// # Argumentos
/// Espera recibir una o más claves como argumentos en la línea de comandos.
/// Con más de una clave, informa además si todas comparten slot, es decir,
/// si el clúster aceptaría una operación multi-clave sobre ellas.
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_args: Vec<String> = args().collect();
    if cli_args.len() < REQUIRED_ARGS {
        eprintln!("Error: Cantidad de argumentos inválida");
        eprintln!("Uso: {} <clave> [clave ...]", cli_args[0]);
        return Err("Error: Cantidad de argumentos inválida".into());
    }

    let config_path = "keyslot.conf";
    let log_path = logger::get_log_path_from_config(config_path);

    let mut slots: Vec<usize> = Vec::new();
    for key in cli_args.iter().skip(1) {
        let slot = get_hash_slots(key.as_bytes());
        let effective_key = get_effective_key(key.as_bytes());

        if key.is_empty() {
            println!("Clave vacía -> slot aleatorio {}", slot);
        } else if effective_key == key.as_bytes() {
            println!("Clave {:?} -> slot {}", key, slot);
        } else {
            println!(
                "Clave {:?} (hash tag {:?}) -> slot {}",
                key,
                String::from_utf8_lossy(effective_key),
                slot
            );
        }

        logger::log_event(
            &log_path,
            &format!("Slot calculado para la clave {:?}: {}", key, slot),
        );
        slots.push(slot);
    }

    if slots.len() > 1 {
        if slots.iter().all(|s| *s == slots[0]) {
            println!(
                "Todas las claves comparten el slot {}: operaciones multi-clave permitidas",
                slots[0]
            );
        } else {
            println!("Las claves no comparten slot: el clúster rechazaría una operación multi-clave");
        }
    }

    Ok(())
}
