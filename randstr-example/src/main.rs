use randstr_core::{CharClasses, GenerationRequest, Generator, LetterPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Honour RUST_LOG, e.g. RUST_LOG=trace to see rejected candidates
    env_logger::init();

    // Generator backed by the thread-local secure random generator
    let mut generator = Generator::new();

    // Letters only, uppercase and lowercase mixed
    let letters = generator.generate(16)?;
    println!("Letters:          {}", letters);

    // Letters and digits, at least one digit is guaranteed
    let alphanumeric = generator.generate_with_digits(16, true)?;
    println!("With digits:      {} (digit: {})", alphanumeric, alphanumeric.contains_digit());

    // The case flags do not narrow the alphabet with the default policy
    let legacy = generator.generate_with(16, false, true, false)?;
    println!("Legacy, upper:    {}", legacy);

    // The strict policy honours them
    let request = GenerationRequest::new(16)
        .with_case(true, false)
        .with_letter_policy(LetterPolicy::Strict);
    let strict = generator.generate_request(&request)?;
    println!("Strict, upper:    {} (all uppercase: {})", strict, strict.is_all_uppercase());

    // A bounded request forces a digit after 2 rejected candidates
    let bounded = GenerationRequest::new(1).with_digits(true).with_max_attempts(2);
    println!("Bounded, 1 char:  {}", generator.generate_request(&bounded)?);

    // Negative lengths are rejected
    match generator.generate(-1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Expected error:   {}", e),
    }

    // Classification of existing strings, special characters are case-neutral
    for sample in ["gjoer#%@ijger", "WDJWOG&$%M@Z#(", "dk9fERgd", "   "] {
        println!(
            "{:>16}: digit={} lower={} upper={}",
            format!("{:?}", sample),
            sample.contains_digit(),
            sample.is_all_lowercase(),
            sample.is_all_uppercase()
        );
    }

    Ok(())
}
