//! Demonstrates a single-block round trip and the byte pipeline.

use shacal_core::{
    decrypt_block, decrypt_bytes, encrypt_block, encrypt_bytes, expand_key, ShacalKey,
};

fn main() {
    // Fixed key so the example output is reproducible.
    let key = ShacalKey::from([0x00010203, 0x04050607, 0x08090A0B, 0x0C0D0E0F]);
    let round_keys = expand_key(&key);

    let block = [0x00112233, 0x44556677, 0x8899AABB, 0xCCDDEEFF, 0x01234567];
    let ct = encrypt_block(&block, &round_keys);
    assert_eq!(decrypt_block(&ct, &round_keys), block);

    let message = b"attack at dawn";
    let ciphertext = encrypt_bytes(message, &key).expect("encrypt");
    let recovered = decrypt_bytes(&ciphertext, &key).expect("decrypt");
    assert_eq!(&recovered[..message.len()], message);

    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!(
        "roundtrip succeeded; {} zero pad bytes left in place",
        recovered.len() - message.len()
    );
}
