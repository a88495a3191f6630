use schemars::schema_for;
use type_graph_config::TypeGraphConfig;

fn main() {
    let schema = schema_for!(TypeGraphConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Failed to serialize configuration schema: {}", err);
            std::process::exit(1);
        }
    }
}
