fn main() -> anyhow::Result<()> {
    otp_tables::logging::init_logging();
    otp_tables::run()
}
