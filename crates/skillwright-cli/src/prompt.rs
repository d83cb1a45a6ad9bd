//! Interactive stdin prompts for the init wizard

use std::io::{self, Write};

use crate::output::OutputStyle;

/// One selectable option in a multi-select prompt
pub struct SelectOption {
    /// Identifier returned on selection
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Short hint shown next to the label
    pub hint: &'static str,
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt for free text with a default used on empty input
pub fn text(style: &OutputStyle, question: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        print!("{}", style.prompt(question));
    } else {
        print!("{}", style.prompt(&format!("{question} [{default}]")));
    }
    io::stdout().flush()?;

    let input = read_line()?;
    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input
    })
}

/// Prompt for yes/no, re-asking until the answer parses
pub fn confirm(style: &OutputStyle, question: &str) -> io::Result<bool> {
    loop {
        print!("{}", style.prompt(&format!("{question} (y/n):")));
        io::stdout().flush()?;
        match read_line()?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Prompt for one or more options by number or identifier
///
/// Accepts comma-separated entries (`1,3` or `claude,cursor`); re-asks until
/// at least one valid option is chosen.
pub fn multi_select(
    style: &OutputStyle,
    question: &str,
    options: &[SelectOption],
) -> io::Result<Vec<String>> {
    println!("{question}");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {} — {}", i + 1, option.label, style.dim(option.hint));
    }

    loop {
        print!("{}", style.prompt("Select (comma-separated numbers or ids):"));
        io::stdout().flush()?;

        let input = read_line()?;
        let mut selected = Vec::new();
        let mut valid = !input.is_empty();

        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let matched = match token.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => Some(options[n - 1].id),
                _ => options.iter().find(|o| o.id == token).map(|o| o.id),
            };
            match matched {
                Some(id) if !selected.iter().any(|s: &String| s == id) => {
                    selected.push(id.to_string());
                }
                Some(_) => {}
                None => {
                    println!("Unknown option: {token}");
                    valid = false;
                    break;
                }
            }
        }

        if valid && !selected.is_empty() {
            return Ok(selected);
        }
        println!("Please choose at least one option");
    }
}
