use stacktag::{ItemStack, Result, Text, TooltipSection, simdnbt::owned::NbtCompound};
use std::time::Instant;

fn main() -> Result<()> {
    let main_instant = Instant::now();
    let mut stack = ItemStack::new("netherite_sword", 1);

    let edit_instant = Instant::now();
    stack
        .add_enchantment("sharpness", 5)
        .add_enchantment("looting", 3)
        .set_lore([
            Text::literal("Forged in dragon fire").color("gold"),
            Text::literal("Never dulls").italic(true),
        ])
        .hide_tooltip_sections(&[TooltipSection::Enchantments, TooltipSection::Modifiers].into())
        .set_unbreakable(true);
    println!("Took {:?} to edit stack", edit_instant.elapsed());

    let nbt: NbtCompound = stack.clone().to_compound();
    let read_back = ItemStack::from_compound(&nbt).inspect_err(|e| println!("{e}"))?;

    for (enchantment, level) in read_back.enchantments().iter() {
        println!("{} {level}", enchantment.id());
    }
    for line in read_back.lore() {
        println!("{}", line.to_plain_string());
    }
    println!("hidden: {:?}", read_back.hidden_tooltip_sections().iter().collect::<Vec<_>>());
    println!("unbreakable: {}", read_back.is_unbreakable());

    println!("Took {:?} in total", main_instant.elapsed());

    Ok(())
}
