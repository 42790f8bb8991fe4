/// Módulo de hashing de claves.
///
/// Implementa el checksum CRC16 (variante XMODEM) usado por Redis Cluster
/// para el cálculo de slots, mediante una tabla precalculada de 256 entradas.
pub mod hashing;

/// Módulo de extracción de hash tags.
///
/// Implementa la regla de llaves `{...}` que determina qué porción de una
/// clave participa en el hashing, usada para forzar que claves distintas
/// queden en el mismo slot.
pub mod hash_tag;

/// Módulo de resolución de slots.
///
/// Combina la extracción de hash tags con el checksum CRC16 para asignar a
/// cada clave uno de los 16384 slots del clúster. Una clave vacía recibe un
/// slot aleatorio en lugar de hashearse.
pub mod slot;

/// Módulo de utilidades.
///
/// Contiene el logger utilizado por el binario `keyslot`.
pub mod utils;
