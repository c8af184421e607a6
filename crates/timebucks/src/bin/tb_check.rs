//! tb-check - Validate TimeBucks notations.

fn main() -> std::process::ExitCode {
    timebucks::cmd::check::main()
}
