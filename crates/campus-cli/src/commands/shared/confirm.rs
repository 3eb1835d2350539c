/// Destructive admin commands run only with `--yes`.
pub fn require_confirmation(yes: bool, target: &str) -> anyhow::Result<()> {
    if yes {
        Ok(())
    } else {
        anyhow::bail!("Refusing to delete {target} without confirmation. Re-run with --yes.")
    }
}
