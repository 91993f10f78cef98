fn main() -> anyhow::Result<()> {
    chat_intent_search::cli::run()
}
