// error: variadic struct field name exceeds MAX_NAME_LEN
use varstruct::field::FieldName;

struct Long;

impl FieldName for Long {
    const NAME: &'static str = "a_hand_written_field_name_well_past_fifty_bytes_long";
    const OWNER: &'static str = "crate::Long";
}

const ID: u64 = <Long as FieldName>::ID;

fn main() {
    let _ = ID;
}
