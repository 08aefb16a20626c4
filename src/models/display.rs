//! Display implementations for models

use super::object::TypedObject;

impl TypedObject {
    pub fn pretty_print(&self) {
        println!("{} {{", self.object_type());

        for name in self.attribute_names() {
            if let Some(value) = self.get(name) {
                match serde_json::to_string_pretty(value) {
                    Ok(rendered) => {
                        let mut lines = rendered.lines();
                        if let Some(first) = lines.next() {
                            println!("    {name}: {first}");
                        }
                        for line in lines {
                            println!("    {line}");
                        }
                    }
                    Err(_) => println!("    {name}: {value}"),
                }
            }
        }

        println!("}}");
    }
}
