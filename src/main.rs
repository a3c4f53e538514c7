use anyhow::Result;

fn main() -> Result<()> {
    instant_convert::cli::run()
}
