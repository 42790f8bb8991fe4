/// Determina la porción de una clave que participa en el hashing.
///
/// Si la clave contiene un hash tag `{...}` no vacío, solo los bytes entre
/// la primera `{` y la primera `}` posterior se hashean. Esto permite forzar
/// que claves distintas caigan en el mismo slot del clúster, por ejemplo
/// `{user1000}.following` y `{user1000}.followers`.
///
/// Solo la primera `{` y la primera `}` que la sigue se consideran. Si no
/// hay `{`, si la `{` no tiene una `}` posterior, o si el par encierra cero
/// bytes (`{}`), se hashea la clave completa.
///
/// # Devuelve
/// El sub-slice de `key` a hashear. Puede ser la clave completa.
pub fn get_effective_key(key: &[u8]) -> &[u8] {
    let open = match key.iter().position(|&b| b == b'{') {
        Some(i) => i,
        None => return key,
    };

    match key[open + 1..].iter().position(|&b| b == b'}') {
        Some(0) | None => key,
        Some(close) => &key[open + 1..open + 1 + close],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_braces() {
        assert_eq!(get_effective_key(b"foo"), b"foo");
    }

    #[test]
    fn test_key_with_tag() {
        assert_eq!(get_effective_key(b"foo{bar}"), b"bar");
        assert_eq!(get_effective_key(b"{foo}bar"), b"foo");
        assert_eq!(get_effective_key(b"{user1000}.following"), b"user1000");
    }

    #[test]
    fn test_unclosed_brace_uses_whole_key() {
        assert_eq!(get_effective_key(b"foo{bar"), b"foo{bar");
        assert_eq!(get_effective_key(b"foo{"), b"foo{");
    }

    #[test]
    fn test_empty_tag_uses_whole_key() {
        assert_eq!(get_effective_key(b"{}foo"), b"{}foo");
        assert_eq!(get_effective_key(b"foo{}"), b"foo{}");
        assert_eq!(get_effective_key(b"foo{}{bar}"), b"foo{}{bar}");
    }

    #[test]
    fn test_only_first_pair_counts() {
        assert_eq!(get_effective_key(b"foo{bar}{zap}"), b"bar");
        assert_eq!(get_effective_key(b"foo{{bar}}zap"), b"{bar");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(get_effective_key(b""), b"");
    }
}
