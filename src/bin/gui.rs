fn main() {
    let presenter_factory = escapetime::PixelsPresenterFactory::new();
    let command = escapetime::RunGuiCommand::new(presenter_factory);

    command.execute();
}
