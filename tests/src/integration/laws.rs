//! # Cipher Laws
//!
//! Randomized checks of the laws that must hold for every machine
//! configuration, not just the pinned reference vectors: per-offset
//! reciprocity, bijectivity, the no-self-encipherment consequence of the
//! reflector, and stepping monotonicity.

#[cfg(test)]
mod tests {
    use enigma_core::{
        CipherApi, CipherEngine, MachineConfig, MachineConfigBuilder, ReflectorModel, RotorModel,
        ALPHABET_SIZE,
    };
    use rand::prelude::*;

    /// Draw a random valid machine configuration.
    fn random_config(rng: &mut impl Rng) -> MachineConfig {
        let mut models = [
            RotorModel::I,
            RotorModel::II,
            RotorModel::III,
            RotorModel::IV,
            RotorModel::V,
        ];
        models.shuffle(rng);

        let reflector = if rng.gen_bool(0.5) {
            ReflectorModel::B
        } else {
            ReflectorModel::C
        };

        let mut builder = MachineConfigBuilder::new()
            .rotors([models[0], models[1], models[2]])
            .offsets([
                rng.gen_range(0..ALPHABET_SIZE),
                rng.gen_range(0..ALPHABET_SIZE),
                rng.gen_range(0..ALPHABET_SIZE),
            ])
            .reflector(reflector);

        // Up to ten disjoint plugboard leads, the historical maximum
        let mut letters: Vec<char> = ('A'..='Z').collect();
        letters.shuffle(rng);
        for pair in letters.chunks(2).take(rng.gen_range(0..=10)) {
            builder = builder.plug(pair[0], pair[1]);
        }

        builder.build().expect("drawn configurations are valid")
    }

    #[test]
    fn test_reciprocity_holds_at_fixed_offsets_for_random_configs() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let config = random_config(&mut rng);
            let mut engine = CipherEngine::new(&config).unwrap();

            for symbol in 'A'..='Z' {
                let before = engine.offsets();
                let enciphered = engine.encipher_one(symbol).unwrap().output;

                engine.set_offsets(before).unwrap();
                let deciphered = engine.encipher_one(enciphered).unwrap().output;
                assert_eq!(
                    deciphered, symbol,
                    "reciprocity violated for {symbol} with config {config:?}"
                );
                engine.set_offsets(before).unwrap();
            }
        }
    }

    #[test]
    fn test_fixed_offset_mapping_is_a_bijection_without_fixed_points() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let config = random_config(&mut rng);
            let mut engine = CipherEngine::new(&config).unwrap();
            let before = engine.offsets();

            let mut seen = [false; ALPHABET_SIZE];
            for symbol in 'A'..='Z' {
                engine.set_offsets(before).unwrap();
                let output = engine.encipher_one(symbol).unwrap().output;
                assert_ne!(
                    output, symbol,
                    "no symbol ever enciphers to itself (config {config:?})"
                );
                let slot = output as usize - 'A' as usize;
                assert!(
                    !seen[slot],
                    "two symbols enciphered to {output} (config {config:?})"
                );
                seen[slot] = true;
            }
        }
    }

    #[test]
    fn test_right_rotor_advances_exactly_once_per_call_in_random_configs() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let config = random_config(&mut rng);
            let mut engine = CipherEngine::new(&config).unwrap();

            for _ in 0..100 {
                let before = engine.offsets();
                engine.encipher_one('A').unwrap();
                let after = engine.offsets();
                assert_eq!(
                    after[0],
                    (before[0] + 1) % ALPHABET_SIZE,
                    "right rotor must advance by exactly one"
                );
            }
        }
    }

    #[test]
    fn test_every_trace_stage_stays_inside_the_alphabet() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let config = random_config(&mut rng);
            let mut engine = CipherEngine::new(&config).unwrap();

            for symbol in 'A'..='Z' {
                let trace = engine.encipher_one(symbol).unwrap();
                assert_eq!(trace.after_plugboard_out, trace.output);
                for (stage, stage_symbol) in trace.stages() {
                    assert!(
                        stage_symbol.is_ascii_uppercase(),
                        "stage {stage} left the alphabet (config {config:?})"
                    );
                }
            }
        }
    }
}
