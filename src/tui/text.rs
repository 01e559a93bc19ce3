use crate::entropy::Source;
use crate::pass::{CharClass, MAX_FORM_LENGTH};
use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top,
    flush, print_error,
};

use super::Form;

/// Visible rendering of a password; spaces are shown as `␠`.
fn visible(password: &str) -> String {
    password
        .chars()
        .map(|c| if c == ' ' { '\u{2420}' } else { c })
        .collect()
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn print_form(form: &Form, source: Source) {
    let config = form.config();

    box_top("Password Generator");
    box_line("");
    if form.output().is_empty() {
        box_line(&format!("  Password: {DIM}(press Enter to generate){RESET}"));
    } else {
        box_line(&format!("  Password: {}", visible(form.output())));
    }
    box_line("");
    box_rule();
    box_line(&format!(
        "  {UNDERLINE}Length{RESET}:  < {:>2} >   (0-{MAX_FORM_LENGTH})",
        config.get_length()
    ));
    box_line("");
    box_line(&format!("  {UNDERLINE}Include{RESET}:"));
    for (i, class) in CharClass::ALL.iter().enumerate() {
        box_line(&format!(
            "    {}) {} {:<12}{DIM}{} chars{RESET}",
            i + 1,
            checkbox(config.is_active(*class)),
            class.name(),
            class.len()
        ));
    }
    box_line("");
    box_line(&format!("  {DIM}Source: {}{RESET}", source.name()));
    box_rule();
    box_line_center("1-4 toggle | \u{2190}/\u{2192} length | Enter generate");
    box_line_center("b copy | q/Esc quit");
    box_bottom();

    match form.status() {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("classpass");
    box_line_center("Password generator with per-class sampling");
    box_line("");
    box_line("Each character picks a class first, then a character");
    box_line("within it, so small classes are not drowned out.");
    box_line("");
    box_line("USAGE:");
    box_line("  classpass              Interactive form");
    box_line("  classpass [OPTIONS]    Print passwords and exit");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt(
        "  -c, --classes <LIST>",
        "Comma list of numbers, lower, upper, punct. Replaces the default.",
    );
    box_opt("  -d, --digits", "Include numbers (on by default)");
    box_opt("  -a, --lower", "Include lowercase letters");
    box_opt("  -A, --upper", "Include uppercase letters");
    box_opt("  -p, --punct", "Include punctuation");
    box_opt("      --no-digits", "Exclude numbers");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output <FILE>", "Append to file");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Randomness:");
    box_opt("      --seed <N>", "Reproducible output from a seeded RNG");
    box_opt("      --thread-rng", "Use the thread RNG instead of the cycle counter");
    box_line("");
    box_line(" Info:");
    box_opt("  -i, --interactive", "Open the form with the given options");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  classpass -l 12               12 digits");
    box_line("  classpass -l 20 -a -A -p      All four classes");
    box_line("  classpass -c lower,upper -n 3");
    box_line("");
    box_line(&format!("{DIM}RUST_LOG=debug shows configuration changes{RESET}"));
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_are_made_visible() {
        assert_eq!(visible("a b"), "a\u{2420}b");
        assert_eq!(visible("x~y"), "x~y");
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
