use mastermind_cli::{exit_code, run};
use mastermind_engine::round::Round;

#[test]
fn deal_output_matches_engine_secret_for_seed() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        vec!["mastermind", "deal", "--seed", "1234"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, exit_code::SUCCESS);

    let text = String::from_utf8(out).expect("utf8 output");
    let symbols: String = Round::new_with_seed(1234)
        .secret()
        .iter()
        .map(|c| c.to_ascii())
        .collect();
    assert!(
        text.contains(&format!("secret: {}", symbols)),
        "deal output {:?} should reveal {}",
        text,
        symbols
    );
}

#[test]
fn rng_check_succeeds_for_arbitrary_seeds() {
    for seed in ["0", "42", "18446744073709551615"] {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["mastermind", "rng", "--seed", seed], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS, "seed {}", seed);
        assert!(String::from_utf8(out).unwrap().contains("deterministic: true"));
    }
}
