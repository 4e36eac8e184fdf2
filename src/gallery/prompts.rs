use rand::seq::SliceRandom;

pub const EXAMPLE_PROMPTS: [&str; 15] = [
    "A magic forest with glowing plants and fairy homes among giant mushrooms",
    "An old steampunk airship floating through golden clouds at sunset",
    "A future Mars colony with glass domes and gardens against red mountains",
    "A dragon sleeping on gold coins in a crystal cave",
    "An underwater kingdom with merpeople and glowing coral buildings",
    "A floating island with waterfalls pouring into clouds below",
    "A witch's cottage in fall with magic herbs in the garden",
    "A robot painting in a sunny studio with art supplies around it",
    "A magical library with floating glowing books and spiral staircases",
    "A Japanese shrine during cherry blossom season with lanterns and misty mountains",
    "A cosmic beach with glowing sand and an aurora in the night sky",
    "A medieval marketplace with colorful tents and street performers",
    "A cyberpunk city with neon signs and flying cars at night",
    "A peaceful bamboo forest with a hidden ancient temple",
    "A giant turtle carrying a village on its back in the ocean",
];

pub fn random_prompt<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXAMPLE_PROMPTS
        .choose(rng)
        .copied()
        .unwrap_or(EXAMPLE_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn picks_from_examples() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            assert!(EXAMPLE_PROMPTS.contains(&random_prompt(&mut rng)));
        }
    }

    #[test]
    fn bundled_page_offers_the_same_examples() {
        let script =
            std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/frontend/app.js"))
                .unwrap();

        for prompt in EXAMPLE_PROMPTS {
            assert!(script.contains(&format!("\"{}\"", prompt)), "{}", prompt);
        }
    }
}
