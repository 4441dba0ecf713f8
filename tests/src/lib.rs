#[cfg(test)]
mod coaching;
