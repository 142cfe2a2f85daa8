use rs_pass_core::password::config::GenerationConfig;
use rs_pass_core::password::generator::PasswordGenerator;
use rs_pass_core::password::pattern::PatternStrategy;
use rs_pass_core::password::strategy::GenerationStrategy;
use rs_pass_core::password::validator::{EntropyValidator, MinLengthValidator, ValidationPipeline};
use rs_pass_core::random::SecureRandomSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a configuration: 20 characters, every character set enabled
    let mut config = GenerationConfig::default();
    config.set_length(20)?;

    // Lengths outside the 8-128 policy range are rejected
    match config.set_length(4) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Length 4 is invalid, must be between 8 and 128"),
    }

    // The symbol alphabet is replaced wholesale, never edited in place
    config.set_symbols("!@#$%");

    // The generator owns the OS entropy source; construction fails if
    // the source is unavailable
    let mut generator = PasswordGenerator::with_config(config)?;

    // Generate 10 passwords using the current configuration
    for i in 0..10 {
        println!("Generated password {}: {}", i + 1, generator.generate()?);
    }

    // Batch generation is bounded: 0 and anything above 100 are rejected
    match generator.generate_batch(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Batch count 0 is invalid, must be between 1 and 100"),
    }

    // Validate a candidate against the configured policy; the outcome
    // carries every violation, not just the first
    let outcome = generator.validate("abc");
    println!("'abc' valid: {}", outcome.is_valid());
    for error in outcome.errors() {
        println!("  - {}", error);
    }

    // Pronounceable mode swaps the strategy through the same facade
    generator.config_mut().pronounceable = true;
    println!("Pronounceable: {}", generator.generate()?);
    generator.config_mut().pronounceable = false;

    // Strategies can also be driven directly with a borrowed source
    let mut rng = SecureRandomSource::new()?;
    let pattern = PatternStrategy::new("ULLLL-DDDD");
    println!("Patterned: {}", pattern.generate(10, &mut rng)?);

    // Custom validation pipelines compose freely
    let mut pipeline = ValidationPipeline::new();
    pipeline.add_rule(MinLengthValidator::new(12));
    pipeline.add_rule(EntropyValidator::new(40.0));
    let strict = pipeline.validate("correct-horse-battery");
    println!("Strict policy valid: {}", strict.is_valid());

    Ok(())
}
