use crate::enzyme::Enzyme;
use crate::errors::*;

pub fn main() -> Result<()> {
    println!("Enzyme\tMotif");
    for enzyme in Enzyme::all() {
        println!("{}\t{}", enzyme.name, enzyme.site_str());
    }

    Ok(())
}
