use crate::utils::error::AppResult;
use std::io::{self, BufRead, Write};

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    read_answer(&mut io::stdin().lock())
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' or 'n'"),
        }
    }
}

fn read_answer(reader: &mut impl BufRead) -> AppResult<String> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
