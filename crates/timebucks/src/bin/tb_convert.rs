//! tb-convert - Move a TimeBucks value through time.

fn main() -> std::process::ExitCode {
    timebucks::cmd::convert::main()
}
