use {ballot_types::JsonSerExt, colored_json::ToColoredJson, serde::Serialize};

pub fn print_json_pretty<T>(data: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = data.to_json_string_pretty()?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}
