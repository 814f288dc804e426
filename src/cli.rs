#[derive(clap::Parser)]
#[command(name = "vsgen", version, about, long_about)]
pub struct Args {
    /// Ignored: premake always runs as `tools/premake5 vs2022`
    #[clap(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub args: Vec<String>,
}
