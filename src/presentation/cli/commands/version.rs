/// Handler for the version command
pub struct VersionCommand {
    pub verbose: bool,
}

impl VersionCommand {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        println!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let mut output = env!("CARGO_PKG_VERSION").to_string();
        if self.verbose {
            output.push_str(&format!("\n  commit: {}", env!("GIT_HASH")));
            output.push_str(&format!("\n  built:  {}", env!("BUILD_DATE")));
            output.push_str(&format!("\n  target: {}", env!("BUILD_TARGET")));
        }
        output
    }
}
