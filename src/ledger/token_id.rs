use alloy_primitives::{keccak256, U256};

/// Derives the ERC-1155 token id of `access_level` within `event_id`.
///
/// The pre-image is the 8-byte big-endian event id followed by the UTF-8
/// bytes of the name (`abi.encodePacked(uint64, string)`), so distinct
/// `(event_id, name)` pairs never share a pre-image; keccak256 then makes a
/// token-id collision computationally infeasible.
pub fn generate_token_id(event_id: u64, access_level: &str) -> U256 {
    let mut preimage = Vec::with_capacity(8 + access_level.len());
    preimage.extend_from_slice(&event_id.to_be_bytes());
    preimage.extend_from_slice(access_level.as_bytes());
    U256::from_be_bytes(keccak256(&preimage).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(generate_token_id(42, "VIP"), generate_token_id(42, "VIP"));
    }

    #[test]
    fn event_id_width_prevents_shifted_collisions() {
        // "1" || "0VIP" vs "10" || "VIP" would collide with a decimal encoding.
        assert_ne!(generate_token_id(1, "0VIP"), generate_token_id(10, "VIP"));
        assert_ne!(generate_token_id(0, "GA"), generate_token_id(0, "GA "));
    }
}
