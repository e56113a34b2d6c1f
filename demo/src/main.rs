use lwe_crypto::errors::LWECryptoError;
use lwe_crypto::keypair::params::LweParams;
use lwe_crypto::noise::{NoiseAnalysis, Ternary};
use lwe_crypto::ring::Matrix;

use rand::Rng;

fn format_matrix(matrix: &Matrix) -> String {
    matrix
        .iter_rows()
        .map(|row| format!(" {:?}", row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run() -> Result<(), LWECryptoError> {
    // Toy parameters for demonstration
    let params = LweParams::toy();
    let q = params.modulus();
    let mut rng = rand::rng();

    log::info!(
        "Running LWE demo with n={}, m={}, q={}",
        params.dimension,
        params.sample_count,
        q
    );

    // Key generation
    let (public_key, secret_key) =
        lwe_crypto::keygen(params.dimension, params.sample_count, q, &mut rng)?;
    println!("Public Key (A, b):");
    println!("A =\n{}", format_matrix(public_key.matrix_A()));
    println!("b = {:?}", public_key.vector_b());
    println!("Secret Key s = {:?}", secret_key.vector_s());

    // Encrypt a random bit
    let message: u8 = rng.random_range(0..=1);
    println!("\nOriginal message: {}", message);

    let ciphertext = lwe_crypto::encrypt(&public_key, message, q, &mut rng)?;
    println!("Ciphertext (u, v):");
    println!("u = {:?}", ciphertext.u);
    println!("v = {}", ciphertext.v);

    // Decrypt the ciphertext
    let decrypted_message = lwe_crypto::decrypt(&ciphertext, &secret_key, q)?;
    println!("Decrypted message: {}", decrypted_message);

    if decrypted_message == message {
        println!("Decryption successful!");
    } else {
        println!("Decryption failed.");
    }

    let analysis = NoiseAnalysis::new(&params, &Ternary)?;
    println!(
        "\nDecryption failure probability for these parameters: {:e} (worst-case noise {}, q/4 = {})",
        analysis.failure_probability(),
        analysis.worst_case(),
        q as f64 / 4.0
    );

    Ok(())
}

fn main() {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    // Decryption outcomes are reported on stdout; an error only cuts the transcript short.
    if let Err(e) = run() {
        log::error!("LWE demo aborted: {}", e);
        eprintln!("Error: {}", e);
    }
}
