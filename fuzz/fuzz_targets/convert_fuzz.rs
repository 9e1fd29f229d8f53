//! Conversion fuzz target: feed arbitrary text to the transducer.
//! Conversion must not panic; it returns Ok(Conversion) or Err(ConvertError).
//! Build with: cargo fuzz run convert_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let lenient = junos_set::ConvertOptions::new().quotes(junos_set::QuoteHandling::Reference);
    if let Ok(c) = junos_set::convert(s, &lenient) {
        let _ = c.lines();
    }
    let _ = junos_set::convert(s, &junos_set::ConvertOptions::default());
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run convert_fuzz");
}
