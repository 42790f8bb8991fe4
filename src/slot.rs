use rand::Rng;

use crate::hash_tag::get_effective_key;
use crate::hashing::crc16;

/// Cantidad total de slots del clúster. Cada nodo es dueño de un subconjunto.
pub const TOTAL_SLOTS: usize = 16384;

/// Calcula el slot de Redis Cluster al que pertenece una clave.
///
/// La clave debe pasarse con los bytes crudos tal cual viajan en el comando,
/// sin transformaciones de codificación, para que el resultado coincida con
/// el del servidor y el del resto de los clientes del clúster.
///
/// ATENCIÓN: una clave vacía NO se hashea. Recibe un slot aleatorio uniforme
/// en `[0, TOTAL_SLOTS)`, distinto en cada llamada, para que las operaciones
/// sin clave no colisionen todas en el slot 0. Es el único caso en el que la
/// función no es determinística; para toda clave no vacía, la misma entrada
/// produce siempre el mismo slot.
///
/// # Devuelve
/// Un slot en el rango `[0, TOTAL_SLOTS)`.
pub fn get_hash_slots(key: &[u8]) -> usize {
    if key.is_empty() {
        return get_random_slot();
    }

    let effective_key = get_effective_key(key);
    crc16(effective_key) as usize % TOTAL_SLOTS
}

/// Devuelve un slot aleatorio uniforme en `[0, TOTAL_SLOTS)`.
///
/// Usa el generador del hilo actual, por lo que puede llamarse desde varios
/// hilos sin sincronización.
pub fn get_random_slot() -> usize {
    rand::thread_rng().gen_range(0..TOTAL_SLOTS)
}
