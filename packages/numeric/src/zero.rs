pub trait Zero {
    const ZERO: Self;
}

pub trait One {
    const ONE: Self;
}

macro_rules! impl_zero_one {
    ($zero: literal, $one: literal; $($type: ty),+ $(,)?) => {
        $(
            impl Zero for $type {
                const ZERO: Self = $zero;
            }

            impl One for $type {
                const ONE: Self = $one;
            }
        )+
    };
}

impl_zero_one!(
    0, 1; i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize
);

impl_zero_one!(0.0, 1.0; f32, f64);
