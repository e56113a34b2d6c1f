use lwe_crypto::errors::LWECryptoError;
use lwe_crypto::keypair::params::LweParams;
use lwe_crypto::noise::{CenteredBinomial, NoiseAnalysis, Ternary};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 1000;

fn success_rate(params: &LweParams, seed: u64) -> Result<f64, LWECryptoError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut successes = 0;

    for _ in 0..TRIALS {
        let (public_key, secret_key) = params.keygen(&mut rng)?;
        let mu: u8 = rng.random_range(0..=1);

        let ciphertext = params.encrypt(&public_key, mu, &mut rng)?;
        if secret_key.decrypt(&ciphertext, &params.ring)? == mu {
            successes += 1;
        }
    }

    Ok(successes as f64 / TRIALS as f64)
}

#[test]
fn toy_parameters_decrypt_correctly() -> Result<(), LWECryptoError> {
    let rate = success_rate(&LweParams::toy(), 2024)?;
    assert!(rate >= 0.99, "success rate {rate}");
    Ok(())
}

#[test]
fn fixed_bits_decrypt_correctly() -> Result<(), LWECryptoError> {
    let params = LweParams::toy();
    let mut rng = StdRng::seed_from_u64(99);
    let (public_key, secret_key) = params.keygen(&mut rng)?;

    for mu in [0u8, 1] {
        let failures = (0..TRIALS)
            .map(|_| {
                let ciphertext = params.encrypt(&public_key, mu, &mut rng)?;
                secret_key.decrypt(&ciphertext, &params.ring)
            })
            .collect::<Result<Vec<u8>, _>>()?
            .into_iter()
            .filter(|&bit| bit != mu)
            .count();

        assert!(failures <= TRIALS / 100, "mu={mu}: {failures} failures");
    }

    Ok(())
}

#[test]
fn pluggable_noise_round_trips() -> Result<(), LWECryptoError> {
    let params = LweParams::try_with(16, 48, 3329)?;
    let cbd = CenteredBinomial::try_with(2)?;
    assert!(NoiseAnalysis::new(&params, &cbd)?.is_always_correct());

    let mut rng = StdRng::seed_from_u64(3329);
    let (public_key, secret_key) = params.keygen_with(&cbd, &mut rng)?;

    for _ in 0..100 {
        let mu: u8 = rng.random_range(0..=1);
        let ciphertext = params.encrypt(&public_key, mu, &mut rng)?;
        assert_eq!(secret_key.decrypt(&ciphertext, &params.ring)?, mu);
    }

    Ok(())
}

#[test]
fn same_seed_reproduces_everything() -> Result<(), LWECryptoError> {
    let params = LweParams::toy();

    let run = |seed: u64| -> Result<_, LWECryptoError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (public_key, secret_key) = params.keygen_with(&Ternary, &mut rng)?;
        let ciphertext = params.encrypt(&public_key, 1, &mut rng)?;
        let bit = secret_key.decrypt(&ciphertext, &params.ring)?;
        Ok((public_key, secret_key, ciphertext, bit))
    };

    assert_eq!(run(7)?, run(7)?);
    assert_ne!(run(7)?.0, run(8)?.0);

    Ok(())
}

#[test]
fn encryption_is_randomized() -> Result<(), LWECryptoError> {
    let params = LweParams::toy();
    let mut rng = StdRng::seed_from_u64(31);
    let (public_key, _) = params.keygen(&mut rng)?;

    let first = params.encrypt(&public_key, 0, &mut rng)?;
    let second = params.encrypt(&public_key, 0, &mut rng)?;

    assert_ne!(first, second);

    Ok(())
}
