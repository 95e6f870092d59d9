use raygen::{Model, Settings};

fn main() {
    let model = Model::new(Settings::default());
    match model.run() {
        Ok(_) => println!("Done."),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
