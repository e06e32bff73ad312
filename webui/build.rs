use vergen_git2::{CargoBuilder, Emitter, Git2Builder};

const FORWARDED_ENV: [&str; 1] = ["GOOGLE_SHEETS_API_KEY"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env next to the workspace or the crate; the process env wins.
    dotenvy::from_filename("../.env").ok();
    dotenvy::dotenv().ok();
    for key in FORWARDED_ENV {
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value.trim());
        }
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=../.env");

    let git = Git2Builder::default()
        .commit_timestamp(true)
        .dirty(true)
        .sha(true)
        .describe(true, true, None)
        .build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .build()?;

    Emitter::default()
        .add_instructions(&git)?
        .add_instructions(&cargo)?
        .emit()?;

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs");
    Ok(())
}
