//! Compressed range tables for every character class.
//!
//! Generated offline from the Unicode character database; do not edit by hand.
//! Each class is a delta dictionary plus a symbol string, see
//! [`EncodedClass`] for the decoding rule. Only the Basic Multilingual Plane
//! is covered.

use crate::category::EncodedClass;

/// Control, format, surrogate, private use and unassigned characters (`C`).
pub const C: EncodedClass = EncodedClass::new(
    "C",
    &[
        0, 1, 2, 3, 4, 5, 8, 7, 6, 11, 9, 10, 12, 13, 14, 15, 16, 27, 23, 24, 20, 37, 44, 48,
        50, 19, 22, 25, 31, 32, 33, 34, 39, 52, 54, 56, 60, 90, 17, 21, 28, 29, 30, 36, 43, 46,
        55, 57, 61, 65, 71, 87, 95, 104, 117, 18, 26, 40, 42, 45, 49, 51, 58, 59, 63, 64, 66,
        68, 73, 77, 79, 96, 102, 107, 112, 125, 127, 136, 141, 149, 162, 185, 187, 191, 192,
        199, 215, 224, 251, 284, 349, 366, 367, 378, 398, 664, 670, 715, 1166, 1813, 6839,
        8451, 11173, 21041,
    ],
    concat!(
        " <g=. \u{81}!'#& \" G ~ @!]!$ C'H#'02!t \\!D!h-D!8!0 I!\" ,A: *40 p *!#!2 & \"\"",
        "%!+!#!%'\"## (!X!$ '##!2 & # # #!\" (##!$\"\"(% \"(W*$ + $ 2 & # (!) $ $!\".%!-(",
        "& $ *!#!2 & # (!+!#!$'### (!9*# '\"$ %\"# \" #\"#\"$\"-#(\"$ %!\"%\"-:$. $ 3 F\"",
        "* $ %(# $$%!)': $ 3 ) (!+ $ %(#(\" %!) #,% * $ A $ '#F!1!# 9\"; + \"!&\"\"#' \" ",
        "*%)!$)_#JK# \"!# \"!\"%% & $ \" \"!# . $!( \" '!)!%<d 5#Y 5 0 .Ku \"$\"!} %!& \"",
        " %!Z %!? %!& \" %!0 ^ %!c!>\"1%S!'!\u{80}\"E(. &+3&G). $ #)T!)%)%/!)%E(6$R*= -#-",
        "#\"\"L!(+[#1%,\"`!b J!,%)%/!0ae#M\"V'P\"0\"P(6!,'L%x y!'!@!'!* \" \" \" =!B 0 /!",
        "' 4!$ + ,$1$8/#!H .\">/?.n#\u{7f}3,4\u{83}!>!8 B 7 7 o$M \"$\"!O(#-;&& & & & & &",
        " & & j71 E)v;-#Q S!U$6 T 6$5)7 w \u{84}*\u{87}/\u{82}\"C&z9q'rDB#)%O'R'-%V+<\"f ",
        ",#? C&/!)!U2I*'!'!'&& & N*l!)%\u{86})3#8\u{85}|!i5&)($1 ( \" # # k0{/Q!N@/!1%A 4",
        " %#( m#s\"'!'!'!$\"& &,#! ",
    ),
);

/// Private use characters (`Co`).
pub const CO: EncodedClass = EncodedClass::new(
    "Co",
    &[
        1792, 6399, 57344,
    ],
    "\"! ",
);

/// Unassigned code points (`Cn`).
pub const CN: EncodedClass = EncodedClass::new(
    "Cn",
    &[
        0, 1, 2, 3, 5, 4, 8, 7, 6, 11, 9, 10, 13, 14, 16, 12, 15, 27, 23, 24, 20, 37, 44, 48,
        19, 22, 25, 30, 33, 34, 39, 50, 52, 54, 56, 61, 90, 17, 21, 28, 29, 31, 32, 36, 43, 46,
        55, 57, 60, 65, 71, 87, 95, 102, 104, 117, 18, 26, 40, 42, 45, 51, 58, 59, 63, 64, 66,
        68, 73, 77, 79, 107, 112, 125, 127, 136, 141, 149, 178, 185, 187, 191, 199, 215, 224,
        241, 251, 284, 349, 366, 378, 398, 664, 670, 888, 1166, 1813, 6839, 8815, 11173, 21041,
    ],
    concat!(
        "~!'#& \" F { >!]!% B'G#'+; u C!U,P!?!. H!\" /@9 *4n *!#!2 & \"\"$!+!#!$'\"## (!Y",
        "!% '##!2 & # # #!\" (##!%\"\"($ \"(X*% + % 2 & # (!) % %!\"-$!,(& % *!#!2 & # (!",
        "+!#!%'### (!8*# '\"% $\"# \" #\"#\"%\",#(\"% $!\"$\",9%- % 3 E\"* % $(# %%$!)'9 ",
        "% 3 ) (!+ % $(#(\" $!) #/$ * % @ % '#E!1!# 8\": + \"!&\"\"#' \" *$)!%)_#;K# \"!#",
        " \"!\"$$ & % \" \"!# - %!( \" '!)!$Id 5#Z 5 . -Kr \"%\"!z $!& \" $![ $!= $!& \" ",
        "$!. ^ $!c!<\"1$S!'!}\"D(- &+3&F)- % #)T!)$)$. )$D(6%R*J ,#,#\"\"L!(+\\#1$/\"`!b ",
        ";!/$)$0!.ae#M\"W'C\".\"C(6!/'L$v w!'!>!'!* \" \" \" J!A . 0!' 4!% + U ,!G -\"<0=",
        "-l#|3/4\u{80}!<!? A 7 7 m%M \"%\"!O(#,:&& & & & & & & & h71 D)s:,#Q S!V%6 T 6%5)",
        "7 t \u{81}*\u{84}0\u{7f}\"B&x8o'pPA#)$O'R',$W+I\"f /#= B&0!)!V2H*'!'!'&& & N*j!)",
        "$\u{83})3#?#\u{82}!g5&)(%1 ( \" # # i.y0Q!N>0!1$@ 4 $#( k!\" q\"'!'!'!%\"& &*(! ",
    ),
);

/// Control characters (`Cc`).
pub const CC: EncodedClass = EncodedClass::new(
    "Cc",
    &[
        0, 31, 32, 96,
    ],
    " !#\"",
);

/// Format characters (`Cf`).
pub const CF: EncodedClass = EncodedClass::new(
    "Cf",
    &[
        0, 4, 2, 50, 5, 9, 23, 27, 173, 193, 250, 1363, 2045, 4351, 56976,
    ],
    "( +$& ) # - ,!'!#!\"%. *\"!",
);

/// Surrogate code units (`Cs`).
pub const CS: EncodedClass = EncodedClass::new(
    "Cs",
    &[
        2047, 55296,
    ],
    "! ",
);

/// Letters (`L`).
pub const L: EncodedClass = EncodedClass::new(
    "L",
    &[
        2, 0, 3, 4, 1, 6, 5, 7, 8, 17, 11, 10, 12, 15, 22, 9, 25, 21, 42, 16, 30, 46, 13, 19,
        37, 14, 18, 24, 29, 35, 40, 53, 26, 27, 32, 33, 43, 88, 20, 23, 28, 31, 36, 48, 49, 50,
        51, 52, 54, 55, 56, 59, 63, 65, 68, 69, 85, 102, 117, 34, 38, 39, 41, 45, 47, 62, 64,
        66, 71, 72, 74, 75, 81, 82, 83, 89, 93, 94, 98, 105, 107, 114, 116, 130, 132, 134, 138,
        165, 191, 268, 277, 332, 362, 365, 457, 470, 513, 619, 1164, 2684, 6581, 8453, 11171,
        20975,
    ],
    concat!(
        "U0'0K!*!&!%. 4 ~&*-#(! !s# $\"\" !'!   ! 7 i v/w 8\"!'>e@&\"52J$ n !3$($* \"!)! ",
        "<4E,!0B+$&!%1&!+!#!;;(+PF 'd?#!7!(/3-&'\"$\"1 % !#\"#!)!9$  -$*!/&&$\"1 % $ $ $B",
        "\" !F )(   1 % $ ##!7!3$;!,'\"$\"1 % $ ##!I$  3!:! &#  \"#$ ! $#$# #*G!?'   . -#",
        "!A %$I!&'   . / ##!C! $3$7'   >\"!)!% / 0&%)#G ( !\"%S` $6%S$ !\"$ !\"!'\" %   !",
        " !\"$ \" $+!\"# !.\"C!b' =H#r21!)&&\"#!#$( &,6!:8 !%!\"2 { \"\"% ! \"\"> \"\"B ",
        "\"\"% ! \"\"9 R \"\"c\\-)X\"&#\u{81}\"3 0%f''(, \"-)-)-,  3NJ!&!VE(#\"C !%W*4M<",
        "\"#,D&0Q.+Oj!m5:%R<9$*DA=2 *=\"((2\" 2\" \"#$+xUz\"&\"8\"&\"' ! ! ! 4\"O % !#  %",
        "#\"\"&&,%  %Z!9!),Y!&!\"/ !##'! ! ! \" +\"\"%#&!?$\u{83}5 5 t'\"#$68 !%!\"Q(!).+",
        "% % % % % % % %h!\u{7f}$D#%$&X'  k \"%2 l:@P-\u{80}\u{84}g\u{87})\u{82}V_\"y#-*$",
        "15)4\"WM(\"Y\"5a+   \" .4N-LT&#! $,A*.@H(5<!)# /*# >;  '1.#!#L !#$\"#\"! !0 \"+(",
        " 6&\"&\"&+% % 2 /*q4\u{86}6.&K\u{85}}\"o]%6#%! / , # ! $ $ p[|7T\"?^*Z# u80'0,E#",
        "&\"&\"&\" =",
    ),
);

/// Uppercase letters (`Lu`).
pub const LU: EncodedClass = EncodedClass::new(
    "Lu",
    &[
        0, 2, 3, 1, 4, 9, 7, 5, 6, 8, 10, 11, 13, 12, 25, 37, 50, 16, 20, 22, 34, 36, 42, 46,
        49, 62, 65, 73, 85, 102, 136, 197, 263, 290, 321, 723, 2203, 2685, 2890, 22377, 31054,
    ],
    concat!(
        ":.=3!(4 ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! ! ! ! ! ! ! ",
        "\" ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! $#! !#!!\"\"!#!!$#!#! ! !#!",
        " \" !#!!! !#$ ) \" \" \" ! ! ! ! ! ! ! \" ! ! ! ! ! ! ! ! \" \" !!! ! ! ! ! ! ! ",
        "! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! )#!#\" !\"! ! ! ! A ! $ % & !!! !#!1",
        "!)5 \"!$ ! ! ! ! ! ! ! ! ! ! ! ( \" !#\"08 ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! * ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! ! ! ! ! \" ! ! ! ! ! ! ! ",
        "! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ",
        "\"/F/! ( C<D6\"!B ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ",
        "! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ",
        "! ! ! * ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ",
        "! ! ! ! ! ! ! ! ! ! ! ! *&%'+&%&%'- ! ! ! %&;\",\",\",$-\"@ ' $!\"!\" $$& ! ! !",
        "\"\"\"+#( 9 E70 !!\" ! ! !\"! \" %!! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! % ! ' H ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! 2 ! ! ! ! ! ! ! ! ! ! ! ! ! > ! ! ! ! ! ! $ ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! + ! !#! ! ! ! ' ! \" ! $ ! ! ! ",
        "! ! ! ! ! ! !$!$! ! G.?",
    ),
);

/// Lowercase letters (`Ll`).
pub const LL: EncodedClass = EncodedClass::new(
    "Ll",
    &[
        0, 2, 3, 1, 4, 5, 7, 9, 6, 8, 11, 13, 42, 25, 28, 10, 12, 19, 20, 23, 26, 33, 34, 37,
        40, 43, 46, 47, 49, 52, 54, 59, 64, 65, 68, 79, 97, 103, 120, 136, 165, 194, 275, 761,
        822, 1066, 2179, 2732, 2888, 20289, 30996,
    ],
    concat!(
        "D-? ,3!&! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#! ! ! ! ! ! ! !#",
        "! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! !!\" ! \" $#% \" $!\" \" ! ! ",
        "\" !#! \" $ ! \"#\"!& \" \" ! ! ! ! ! ! ! !#! ! ! ! ! ! ! ! !#\" ! $ ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !(\" \"#! % ! ! ! !B!4I ! $ $!1 .6!",
        "#$!! ! ! ! ! ! ! ! ! ! ! !$! \" \"#=;! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! / ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! \" ! ! ! ! ! !#! ! ! ! ! ! ! ! ! ! ",
        "! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! <8P,",
        "\"!K%N)F9@0!5E ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !",
        " !)! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! !)'%*&'&'%*&'&'+\"&'&'&'$!#& $!!#'\"\"#'&*!!#J $#$ . % % \"#'",
        "\"% > O:\" $#! ! ! % !#!%( ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !#) ! % +7! ( R ! ! ! ! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! 2 ! ! ! ! ! ! ! ! ! ! ! ! ! G ! ! ! ! ! !!! ! ! ! ! ! ! !",
        " ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! ! !&! ! \" ! ! ! ! % ! \" !!! ! ! !",
        " ! ! ! ! ! ! ( ( ! ! A L,(%*CQ(+$M-H",
    ),
);

/// Titlecase letters (`Lt`).
pub const LT: EncodedClass = EncodedClass::new(
    "Lt",
    &[
        0, 7, 3, 9, 13, 16, 39, 48, 453, 7574,
    ],
    "( \" \" & )!#!#!$ % ' ",
);

/// Modifier letters (`Lm`).
pub const LM: EncodedClass = EncodedClass::new(
    "Lm",
    &[
        0, 1, 5, 4, 2, 6, 8, 14, 17, 470, 3, 10, 11, 12, 15, 22, 23, 24, 29, 32, 35, 36, 44,
        46, 62, 81, 94, 96, 98, 104, 108, 109, 112, 115, 122, 128, 134, 138, 165, 175, 192,
        231, 242, 270, 271, 329, 465, 479, 566, 612, 688, 690, 1237, 1251, 1755, 3040, 21521,
        28439,
    ],
    concat!(
        "R(\",.#& $ D % O I F!K!\" 3 + # M T C P V > Q N\"G8' 45S ' (-W!J H ) 6#% <!:$Y U",
        "\"L A 2!B&9 1 @!) 0 E ? /!=*X 7!;",
    ),
);

/// Letters without case (`Lo`).
pub const LO: EncodedClass = EncodedClass::new(
    "Lo",
    &[
        2, 0, 3, 4, 1, 6, 5, 7, 15, 8, 11, 17, 9, 12, 22, 21, 25, 10, 16, 30, 14, 19, 24, 29,
        46, 13, 18, 20, 26, 27, 31, 32, 33, 34, 35, 40, 42, 43, 53, 54, 68, 114, 23, 28, 41,
        49, 50, 51, 52, 55, 56, 63, 69, 170, 36, 38, 39, 44, 47, 48, 59, 60, 64, 66, 67, 71,
        74, 75, 85, 88, 89, 93, 98, 104, 105, 106, 107, 116, 117, 134, 146, 177, 209, 257, 267,
        328, 362, 365, 513, 552, 619, 828, 1087, 1142, 3064, 6581, 8453, 11171, 20975,
    ],
    concat!(
        "U!2!s!&\"r!{<&\"8> ,V$ h !0$* \"!+! 73e-!0?./E6)1G; 'aF#!5!),+4&'\"$\"/ % !#\"#!",
        "+!4$  ($*!,&&$\"/ % $ $ $?\" !; +)   / % $ ##!5!2$6!-'\"$\"/ % $ ##!>$  2!:! &# ",
        " \"#$ ! $#$# #*J!F'   . (#!= %$>!&'   . , ##!@! $2$5'   C\"!+!% , 0&%+#J ) !\"%",
        "\\Z $9&]$ !\"$ !\"!'\" %   ! !\"$ \" $1!\"#6\"@!^' BK#mD/!+&&\"#!#$) &-9!Iu \"\"",
        "% ! \"\"C \"\"? \"\"% ! \"\"4 R \"\"_W(Iz\"2 0%b'')- \"(+(+(-  2OL!HA P)#\"@ !%T",
        "*3N7\"#-E&0Q.1Pq8:%R74$*E=BD *7I\" \"#$|\"~Q0.1% % % % % % % %y!G!&d,! f&!%D g:<",
        "G(x\u{7f}c\u{82}+; }HX,t&(*$`!NTU!i!#%   \" .3O(MS&#! $-=*.<K)88#\")*# C6  '/( &",
        "#!#M !#$\"#\"! !0$#1)!(&\"&\"&1% %pA3\u{81}9.&[\u{80}w\"jH! , - # ! $ $ lAv5S\"F",
        "L*n# ok, Y\"3#&\"&\"&\" B",
    ),
);

/// Marks (`M`).
pub const M: EncodedClass = EncodedClass::new(
    "M",
    &[
        2, 0, 1, 3, 4, 5, 6, 10, 11, 31, 57, 12, 13, 7, 8, 17, 9, 14, 19, 30, 49, 15, 20, 24,
        26, 27, 28, 32, 35, 39, 44, 46, 48, 51, 58, 120, 16, 21, 23, 25, 29, 33, 36, 37, 41,
        42, 45, 50, 55, 56, 59, 60, 62, 65, 66, 68, 71, 73, 75, 81, 89, 92, 97, 99, 101, 102,
        106, 111, 119, 142, 153, 199, 220, 237, 264, 273, 276, 464, 555, 704, 721, 738, 768,
        947, 3071, 20273, 30165,
    ],
    concat!(
        "rcl&j> ! \" \" !Y'46/!a&#%#\" #J!)8]'R.'!G# .   $> C1 ;P  / &(\"3 *! &#\"# '!(\"",
        "9!# *! $%\"# $!)\"$!+ *! -    E\"F%  *! &#\"# 0\"(\")!S$$  #'!L$B&   #.\"+\"3 *!",
        " &   #.\"+\"H#Q\" &   #'!(\")\"X!%% ! -2\"T!#&,-_!#% \"+%Z\":! ! !%\"O2 \"&' <'!",
        "`27#%   #&$#1( !(#o s 3 3\")\"U)'!? C\"<!d(%(h$B0 :#!41V$@D=., )+*,42f  6%!% # g",
        "* $p;t e!^)n%b\"v# 0I\"[\"k!$!%!7$\\\"A/9/1!=-8+N#@,K!W,,!0\"? A!  #\"&\" !M$&\"",
        "i- \"u!q5/5m",
    ),
);

/// Non-spacing marks (`Mn`).
pub const MN: EncodedClass = EncodedClass::new(
    "Mn",
    &[
        0, 2, 1, 3, 5, 4, 6, 7, 9, 10, 12, 13, 31, 59, 8, 17, 21, 26, 30, 49, 58, 14, 11, 15,
        27, 33, 35, 41, 44, 56, 57, 103, 120, 16, 20, 23, 25, 28, 29, 36, 39, 43, 46, 47, 48,
        51, 52, 62, 65, 67, 68, 73, 75, 81, 91, 92, 97, 99, 102, 108, 111, 119, 142, 153, 158,
        199, 220, 239, 266, 273, 276, 464, 555, 704, 721, 738, 768, 947, 3071, 20273, 30165,
    ],
    concat!(
        "l\\f%d<! !\"!\"! S)3B/ Z&#$#\"!#G ,1W)-.) D#!.!!!%<!@5!,= ! $'$ %&6\"2 - $#( 0\"",
        "8 #\"4 $\"$\"#!% ,\"% *\"4 $%!\"$ 0\"C$! - # !#( ( *\", O + M % 4!&!!#.\"*\"2 - ",
        "# ' &\"0\"F\"4\"$#( 0\"? .!! V #&+'Y #$!\"*$T\"E ! ! =+!%!\"&)!:) ?#!$!\"#\"1\"$",
        "!/#5 #\"' A i!m!2!2\",\"P\"!&( #)) J!@\": ]!$\") '!b\"# - !&! ! #''(# 3+Q#3 !%! ",
        "& ;.+\"9##\"!!> !\"% !!-'#\"_!!*!&$ ' %\"a>!%j*$ %6n!^ X,h#[\"p $(9\"U\"e % $ 1",
        "\"`\"8/5 H'1)K!3 ### ; R$#\"#\"+ ( L N !!#\"&\"! I\"( c # $ o k7/7g",
    ),
);

/// Enclosing marks (`Me`).
pub const ME: EncodedClass = EncodedClass::new(
    "Me",
    &[
        2, 0, 1, 3, 1160, 1567, 5685, 34188,
    ],
    "$\"&!%#  ' ",
);

/// Spacing combining marks (`Mc`).
pub const MC: EncodedClass = EncodedClass::new(
    "Mc",
    &[
        1, 0, 2, 3, 5, 7, 59, 11, 4, 6, 9, 49, 62, 10, 44, 51, 172, 8, 15, 17, 19, 22, 25, 26,
        31, 42, 43, 46, 48, 54, 56, 61, 64, 67, 76, 89, 103, 110, 111, 143, 146, 225, 238, 331,
        347, 1818, 2307, 4919, 21523, 30708,
    ],
    concat!(
        "N!>!#\"*#\" / &\"% # '!.!&\"A!&\"*!\" = &!\"!% # '!D \" (\"\"\"'!9\",#, &!\"(# ",
        "\" - . &\")\"\"\"'!: B\"%%4 K @!0 $!%!# 7 '\"#)5 #$#!'\"M!1%\" L##\"$ \"$I &!\"!",
        "-!\" *$H!+!)!\"(\" ,!8!$ #!?!#\"\"!( +%* 0!3 (!O Q #!C /2G <!+ $ \"#F # 6!;!\"!E",
        "!# )!J \" \" \"!P",
    ),
);

/// Numbers (`N`).
pub const N: EncodedClass = EncodedClass::new(
    "N",
    &[
        9, 5, 7, 0, 2, 3, 119, 6, 199, 4, 8, 14, 19, 23, 71, 87, 135, 1, 10, 12, 15, 18, 21,
        26, 29, 31, 33, 39, 40, 48, 50, 59, 79, 97, 104, 105, 109, 110, 111, 116, 121, 129,
        139, 155, 166, 183, 189, 230, 240, 269, 301, 321, 344, 407, 413, 631, 720, 727, 778,
        882, 1047, 1386, 1442, 21271, 29537,
    ],
    concat!(
        "= H1'#%$^ 0 ( V & !!D & & %!F3G  'B C'*5E A & .,Q . X,[$P \" - R I2L \" M / 0 \"",
        " \\#)!\" (>%)Y?@6W8]#Z#7*4$T%J 9\"$+: <+` N S!K ; ( - / U _ O",
    ),
);

/// Decimal digits (`Nd`).
pub const ND: EncodedClass = EncodedClass::new(
    "Nd",
    &[
        9, 119, 7, 39, 71, 87, 135, 199, 23, 48, 97, 129, 167, 183, 230, 279, 301, 407, 413,
        679, 1575, 1863, 21271, 35271,
    ],
    ") 4 & ' 2 ! ! ! ! ! ! ! ! ! * ! $ / $ 5 # 0 + , \" - % & \" 7 3 # ' ( % 1 6 .",
);

/// Letter numbers such as Roman numerals (`Nl`).
pub const NL: EncodedClass = EncodedClass::new(
    "Nl",
    &[
        2, 3, 0, 8, 9, 15, 26, 34, 2672, 3711, 5870, 22800, 30380,
    ],
    "* ('!!)\"&#% ,$+",
);

/// Other numbers (`No`).
pub const NO: EncodedClass = EncodedClass::new(
    "No",
    &[
        0, 9, 5, 2, 6, 3, 7, 14, 1, 4, 8, 15, 18, 19, 21, 29, 31, 33, 40, 42, 59, 79, 121, 134,
        139, 178, 199, 218, 377, 434, 481, 631, 727, 1078, 1140, 1173, 1386, 1686, 2358, 22474,
        30065,
    ],
    "9($ %#F\"<\"6#7$;$,*=!A-B!> E )\"&!:+3 @45.?/D C%8!0&#'1!2'H\"G",
);

/// Separators (`Z`). Tab, newline and carriage return are not in here; see [`HORIZONTAL`] and [`VERTICAL`].
pub const Z: EncodedClass = EncodedClass::new(
    "Z",
    &[
        0, 1, 6, 10, 30, 32, 48, 128, 2432, 4001, 5600,
    ],
    "% ' * (#$!\" & ) ",
);

/// Space separators (`Zs`).
pub const ZS: EncodedClass = EncodedClass::new(
    "Zs",
    &[
        0, 10, 32, 37, 48, 128, 2432, 4001, 5600,
    ],
    "\" % ( &!# $ ' ",
);

/// Line separator (`Zl`), a single code point.
pub const ZL: EncodedClass = EncodedClass::new(
    "Zl",
    &[
        0, 8232,
    ],
    "! ",
);

/// Paragraph separator (`Zp`), a single code point.
pub const ZP: EncodedClass = EncodedClass::new(
    "Zp",
    &[
        0, 8233,
    ],
    "! ",
);

/// Punctuation (`P`).
pub const P: EncodedClass = EncodedClass::new(
    "P",
    &[
        0, 1, 2, 3, 5, 11, 4, 9, 6, 13, 12, 14, 17, 21, 23, 27, 28, 30, 32, 33, 38, 45, 72, 75,
        91, 404, 7, 8, 10, 15, 19, 31, 34, 36, 41, 42, 44, 46, 48, 50, 52, 55, 60, 63, 64, 65,
        79, 80, 87, 98, 99, 100, 103, 112, 113, 116, 121, 122, 125, 127, 129, 141, 144, 150,
        152, 154, 156, 158, 169, 172, 173, 209, 217, 234, 250, 262, 270, 314, 368, 381, 435,
        467, 613, 621, 634, 703, 764, 829, 1086, 20819, 29699,
    ],
    concat!(
        "3\"\"$\"#%!&!/\"\" 0 \" A ( & %!& & u ' q$C!H \" # # 5!-!\"!+ #!7#T D)i\"I+2 k!%",
        " ] X Y 9 n 8 %!d+\" 4#6 7&$!U$e r;` s!5!N\"6!c\"\"\"4<m!h!\\(\"$f(b#J&K!M:* w.'>",
        "\"*\"%?!=!t#1!x)O!2'9-L#3!v#\"!V ^E\"1p\"$'#%, ) R 8 z!l\"S % W$o#P!B\"\" G!F Q*",
        ",!Z#[!,!j y!g'.@\")\" $ \"!_\"\"$\"#%!&!/\"\" 0 \" \"(a",
    ),
);

/// Dash punctuation (`Pd`).
pub const PD: EncodedClass = EncodedClass::new(
    "Pd",
    &[
        0, 1, 5, 3, 11, 20, 32, 38, 45, 52, 112, 170, 476, 1030, 1373, 2058, 3586, 3650, 52625,
    ],
    "( . ) 1 - /\"0 # &!\" , % * 2!' $ + ",
);

/// Opening punctuation (`Ps`).
pub const PS: EncodedClass = EncodedClass::new(
    "Ps",
    &[
        0, 2, 4, 3, 32, 51, 16, 18, 26, 30, 31, 33, 34, 39, 40, 56, 65, 81, 171, 216, 405, 454,
        635, 1062, 1087, 1887, 2431, 3775, 52514,
    ],
    concat!(
        ". % $ ; ! 9 : \" - / & 6 ! * 8 ! ! ! ! ! ! 1 + ! ! ! ! 4 ! ! ! ! ! ! ! ! ! ! 0 !",
        " , 7 ! ! ! ( 5 ! ! ! ! \" ! ! ! # < 3 ) ! ! ! ! ! ! ! \" ' ! ! 2 % $ \" # ",
    ),
);

/// Initial quote punctuation (`Pi`).
pub const PI: EncodedClass = EncodedClass::new(
    "Pi",
    &[
        0, 3, 1, 2, 4, 5, 16, 26, 171, 3529, 8045,
    ],
    "( * !\"! ' ) # % ! & $ ",
);

/// Closing punctuation (`Pe`).
pub const PE: EncodedClass = EncodedClass::new(
    "Pe",
    &[
        0, 2, 3, 4, 32, 52, 1, 16, 18, 30, 31, 33, 34, 41, 56, 65, 81, 171, 218, 405, 480, 635,
        1062, 1087, 1887, 2474, 3774, 52511,
    ],
    concat!(
        "- % $ : ! 8 9 . ' 5 ! * 7 ! ! ! ! ! ! 0 + ! ! ! ! 3 ! ! ! ! ! ! ! ! ! ! / ! , 6 ",
        "! ! ! 4 ! ! ! ! # ! ! ! \"&; 2 ) ! ! ! ! ! ! ! # ( ! ! 1 % $ \" \" ",
    ),
);

/// Final quote punctuation (`Pf`).
pub const PF: EncodedClass = EncodedClass::new(
    "Pf",
    &[
        0, 4, 2, 3, 5, 16, 29, 187, 3529, 8030,
    ],
    "' ) ! & ( \" $ # % ! ",
);

/// Connector punctuation such as `_` (`Pc`).
pub const PC: EncodedClass = EncodedClass::new(
    "Pc",
    &[
        0, 1, 2, 20, 25, 95, 240, 8160, 56799,
    ],
    "% '!# (!$\"& ",
);

/// Other punctuation (`Po`).
pub const PO: EncodedClass = EncodedClass::new(
    "Po",
    &[
        0, 2, 1, 3, 4, 5, 11, 8, 9, 6, 7, 14, 12, 17, 21, 28, 55, 75, 113, 125, 10, 13, 15, 23,
        32, 33, 37, 38, 41, 42, 44, 45, 48, 50, 58, 60, 63, 65, 69, 72, 87, 91, 98, 100, 103,
        112, 116, 121, 122, 127, 129, 141, 144, 150, 154, 156, 158, 169, 172, 173, 190, 217,
        234, 250, 262, 270, 314, 368, 381, 404, 435, 467, 613, 703, 773, 835, 3227, 21029,
        29699,
    ],
    concat!(
        "9!!!# ! !\"&\"$\"/ F ) 6\"' i ( g%= 0 # # ?\".\"!\"+ #\"1#L >5^!0+8 `\"& S O P e",
        " c I &\"Y+! 2 1$%\"M%Z h'j\"3!G\"X!!!;%!#b\"]\"R)!%[)W#C$D\"E*, k\"(*('###!$4! !",
        "(l#!\"2 T\"%!# #'!\"! #\"&$!(##! !&f!B \\ n\"a!K & N%d#H\"<!! A\"@ J,-\"3#Q\"-\"",
        "_ m)# 7 .\"##$!!#'!* !\"U!!!# ! !\"&\"$\"/ : #\"V",
    ),
);

/// Symbols (`S`).
pub const S: EncodedClass = EncodedClass::new(
    "S",
    &[
        0, 2, 1, 3, 5, 6, 14, 7, 11, 9, 31, 13, 16, 4, 10, 12, 28, 32, 8, 15, 17, 20, 22, 23,
        29, 30, 33, 36, 48, 62, 158, 198, 21, 25, 26, 27, 35, 38, 40, 42, 45, 52, 54, 59, 63,
        65, 70, 77, 82, 88, 92, 101, 104, 113, 118, 119, 127, 130, 131, 133, 134, 137, 140,
        155, 194, 207, 208, 213, 226, 231, 244, 246, 248, 251, 255, 267, 354, 357, 373, 375,
        402, 406, 459, 499, 570, 571, 574, 615, 753, 1089, 1090, 6593, 20430, 22161,
    ],
    concat!(
        "; ' 4!1 ! 0 ! ;-!\"# !## - * 1 r#++%%! !,V 3\"U ^ k!W!# #\"a ( 5\"h 2\"s\"'\"g X",
        " Z'[ b G ? `!, !!#$@ ! ! \\'!$!\"%#?\"x)z m >:l).2y !!/!&!&!&\"N & F!&!5*M\"!#!",
        "\"( !!%$! ! ! $ /\"$-%#! K\"$o$0#iB.PO7wH<#9(p7=$*#n#*#<!Ie$qA!Q+cC() &\"+ 6\"'",
        "\"R\"f\"$):D89/8) ,*(E,=!j{L}Jt6.\"T\">#(#v!d | ]3u\"S !!# _ ' 4!1 ! 0 ! Y%!%&\"",
        "!",
    ),
);

/// Math symbols (`Sm`).
pub const SM: EncodedClass = EncodedClass::new(
    "Sm",
    &[
        0, 2, 3, 5, 1, 4, 7, 32, 62, 14, 17, 31, 40, 257, 6, 8, 10, 11, 15, 19, 20, 23, 24, 30,
        33, 38, 41, 43, 46, 49, 55, 69, 91, 112, 130, 132, 140, 165, 267, 337, 470, 528, 767,
        825, 6716, 53213,
    ],
    concat!(
        "; *!( ! < # 9 ' J I!L ) ,!)!D ,%& ?%.$# \" \" / '$\" ! 'F8$@ +6:#H 0 >&A G%\"712",
        "-B5(#+\"-=4\"#M K !!E *!( ! C &\"3",
    ),
);

/// Currency symbols (`Sc`).
pub const SC: EncodedClass = EncodedClass::new(
    "Sc",
    &[
        0, 1, 499, 3, 4, 8, 25, 31, 36, 109, 124, 126, 155, 220, 246, 264, 582, 1258, 2245,
        2460, 21956, 34681,
    ],
    "( +#1 * \"!\"!% . / 0 3 2'5 4 ) , -!$!&",
);

/// Modifier symbols (`Sk`).
pub const SK: EncodedClass = EncodedClass::new(
    "Sk",
    &[
        0, 2, 1, 14, 6, 13, 15, 3, 4, 5, 7, 10, 12, 16, 22, 28, 72, 94, 104, 118, 163, 522,
        893, 977, 4253, 7224, 20567, 30308,
    ],
    "1 ! 0 * ) ( 5'%%$$! !-3 &\"9 !!,!#!#!#\"8\";.+\"2\"7 :&6 ! 4 /",
);

/// Other symbols (`So`).
pub const SO: EncodedClass = EncodedClass::new(
    "So",
    &[
        0, 2, 1, 3, 5, 7, 9, 11, 6, 10, 16, 29, 30, 4, 8, 12, 13, 14, 22, 26, 31, 33, 38, 255,
        15, 19, 20, 21, 23, 25, 27, 35, 39, 42, 43, 45, 47, 48, 52, 53, 54, 59, 62, 63, 65, 68,
        77, 80, 82, 88, 110, 128, 131, 133, 134, 158, 166, 182, 198, 207, 208, 213, 231, 247,
        248, 267, 269, 337, 354, 374, 392, 406, 487, 513, 516, 574, 753, 866, 978, 1412, 1447,
        6593, 21380, 22161,
    ],
    concat!(
        "X # $ ! n a\"S\"[ ' :\"` j e T$! U \\ A f!* !!#$; ! ! V%!$!\"(#Z\"l&p W5d&).o\"!",
        "#!\"' !\"%$! ! ! $ /\"8 !\"! I\")-##!\"!\"!(!,#\"! !,b%$9#(#O!+3@%M3)PN<Y!.!G&R!",
        "_CBL7iD2\"%6#4#E!F^$g=!Q0]>'& 1\"0 2\"%\"c\"$&5?+,/+& *4'6*J!7qKsHm#'\"! k!r h -",
        " $\"1\"!",
    ),
);

/// Letters, numbers and `_`: the `\w` class.
pub const WORD: EncodedClass = EncodedClass::new(
    "w",
    &[
        2, 3, 0, 4, 5, 1, 6, 9, 7, 8, 11, 10, 12, 15, 13, 14, 17, 18, 19, 25, 48, 21, 22, 30,
        37, 42, 35, 40, 16, 20, 23, 26, 27, 33, 46, 54, 28, 31, 38, 39, 45, 52, 53, 55, 57, 58,
        62, 69, 73, 75, 85, 88, 116, 24, 29, 32, 34, 41, 43, 44, 47, 50, 51, 56, 59, 63, 64,
        65, 66, 67, 68, 72, 74, 77, 79, 82, 83, 89, 93, 100, 101, 102, 105, 107, 114, 115, 122,
        128, 132, 134, 138, 165, 249, 268, 282, 321, 332, 362, 365, 457, 470, 619, 631, 727,
        1133, 1164, 6581, 8453, 11171, 20975,
    ],
    concat!(
        "4')3$\" 34\")% \"#%   6 7 \u{83}$*-#)\" \"1T %!! \"(\"   \" 2 k z #!{ 8!\"(;'[ ",
        "\" % % \"'?$!7+&P$p (!' 1!\"0M!o-J$\"!\"!H2@$+C= (6/ w!' 1 (!%!5 & \"#!!)!%!!'\"",
        "$% #!*!$!\" \"!  $$%!5 & % % %!\" #$%! #\")! \")-,  )   5 & % #!'    !\"<!!'+&  ",
        " (!%!5 & % #!)!%! '%$% #!' &*% $#  !#% \" %#%# #*$##  !!\"(\"-,/,   6 -#(   !)% ",
        " &!!''& ! (   6 ' #!)   !)%)\" !!' %/! (   ]   #&-!1 $!% 0#> ) \"!&#\"$$ \" (('!",
        "%/L&/ ';% \"!% \"!\"(! &   \" \"!% ,  !# \" $!'!!A\"U%(2 \" \" \"$' :$2 0 :+\"MP",
        "(i!8 \"&\"!9 \u{80} !!& \" !!; !!W !!& \" !!/ _ !!d! +2#-0R!$#\u{85}!< 3&h#+), &",
        ",=,2.,   %.l#\"$%!'('1 !'(S)9&O*7 *$**G!#,Z$3(+F@$N D!+('/\"'.eQ$'1).u.K''#4!))9",
        "! 0  8(| ~!$!8!$!( \" \" \" 7!I & \"#  &#!!$$,&  &T%!$&+(,I,$\"#*1\"$\"!' \"##(",
        "\" \" \" ! +!!&#$\" L\u{87}`j5\u{86}V\u{88}B B x()+\"!8 \"&\"!K)\"<>+& & & & & &",
        " & & E4\"\u{84} ?/ #!#$R!%!  m !&9 n#!*?C-A'E( /A';/\u{7f}\u{8a}Q\u{8d}0\u{89}fH",
        "!}#@5\\$' tF)!q!BN4'$*^.O*'(>#\" 4!:.D#b-+(7 C+.!'(6#g3 !-!#*$!$!$+& & 9 '*v %!'",
        "(\u{8c}.6$4\u{8b}\u{82}!rG&.#&* , # \" % % sX\u{81}2a!JY*$-0-c# y=')3(3,S#$!$!$!",
        " :",
    ),
);

/// Every character allowed somewhere in an identifier (`J`).
pub const IDENTIFIER: EncodedClass = EncodedClass::new(
    "J",
    &[
        2, 3, 0, 4, 5, 1, 6, 9, 7, 8, 12, 10, 11, 15, 13, 25, 14, 17, 19, 18, 21, 22, 48, 37,
        42, 26, 30, 40, 16, 20, 23, 27, 28, 31, 33, 35, 46, 54, 32, 38, 39, 53, 55, 57, 58, 62,
        67, 69, 73, 75, 85, 88, 24, 29, 34, 41, 43, 44, 45, 47, 50, 51, 52, 56, 59, 63, 64, 66,
        68, 72, 74, 77, 79, 82, 83, 89, 93, 100, 101, 102, 105, 107, 114, 115, 116, 122, 128,
        132, 134, 138, 165, 249, 268, 282, 321, 332, 362, 365, 457, 470, 619, 631, 727, 1133,
        1164, 6581, 8453, 11171, 20975,
    ],
    concat!(
        "\")&.'\"*')/$\" /$F!!$\")% \"#%   5 : \u{82}$,-#)\" \"3t %!! \"(\"   \" 2 i y #!",
        "z 7!\"(;(\" Y \" % % \"'9$!/\"$+&P$n (!' 3!\"1L!m-I$\"!62?$+E= (50 v!' 3 (!%!4 &",
        " \"#!!)!%!!'\"$% #!2 % \"!  $$%!4 & % % %!\" #$%! #\")! \")-*  )   4 & % #!'    ",
        "!\"<!!' \")&   (!%!4 & % #!)!%! '%$% #!' &,% $#  !#% \" %#%# #,$##  !!\"(\"-*(\"",
        "(*   5 -#(   !)%  &!!''& ! (   5 ' #!)   !)%)\" !!' %0! (   \\   #&-!3 $!% 1#> )",
        " \"!&#\"$$ \" (('!%0K$- ';% \"!% \"!\"(! &   \" \"!% *  !# \" $!'!!B\"T%(2 \" \"",
        " \"$' C$2 1 C+\"LP(g!7 \"&\"!8 \u{7f} !!& \" !!; !!F !!& \" !!0 _ !!c! +2#-1R!$#",
        "\u{84}!< /&f#+)* &*=*2.*   %.j#\"# !'('3 !'(S)8&O,: ,$,,H!#*X$/(+G?$M @!+('0\"'.",
        "NQ$'3).s.J''#6!))8! 1  7({ }!$!7!$!( \" \" \" :!^ & \"#  &#!!$$*&  &N%=\"@%!$&+(",
        "*#A1*$\"#,3\"$\"!' \"##(\" \" \" ! +!!&#$\" K\u{86}`h4\u{85}U\u{87}D D w()+\"!7 ",
        "\"&\"!J)\"<>+& & & & & & & & A6\"\u{83} 90 #!#$R!%!  k !&8 l#!,9E-B'A( 0B';0~",
        "\u{89}Q\u{8c}1\u{88}dZ!|#?4[$' rG)!o!DM6'$!\")].O,'(>#\" 6!C.@#b-+(: E+.!'(5#e/ ",
        "!-!#,$!$!$+& & 8 ',u %!'(\u{8b}.5$6\u{8a}\u{81}!pH&.#&, * # \" % % qV\u{80}2a!IW",
        "*#-1-#%/ 9\"(# x)\"*')/$\" /*S#$!$!$! #%#%/",
    ),
);

/// Characters allowed first in an identifier (`Js`).
pub const IDENTIFIER_START: EncodedClass = EncodedClass::new(
    "Js",
    &[
        2, 0, 3, 4, 1, 6, 5, 8, 7, 12, 17, 10, 25, 11, 15, 22, 9, 16, 21, 42, 29, 40, 30, 46,
        13, 18, 19, 26, 14, 37, 20, 23, 24, 27, 31, 32, 33, 35, 36, 55, 88, 28, 41, 43, 49, 51,
        52, 53, 54, 56, 59, 63, 65, 67, 68, 85, 34, 38, 39, 45, 47, 48, 50, 62, 64, 66, 69, 71,
        74, 75, 79, 81, 82, 83, 89, 93, 94, 98, 102, 105, 107, 114, 116, 130, 132, 134, 138,
        165, 191, 268, 277, 332, 362, 365, 457, 470, 513, 619, 1164, 2680, 6581, 8453, 11171,
        20975,
    ],
    concat!(
        "F!4,&! ,5\"&!-!&!%/ 6 ~&-.#'! !s# $\"\" !(!   ! : h v0w =\"!(5(!T;&\",!23F$ m !1",
        "$'$- \"!*! 46H)!,C+$&!#?&!+!#!@@'+P> (cO#!:!'01.&(\"$\"2 % !#\"#!*!<$  .\"'$0&&$",
        "\"2 % $ $ $C\" !> *'   2 % $ ##!:!1$1!'!)(\"$\"2 % $ ##!B$  1!9! &#  \"#$ ! $#$#",
        " #-?!J!)(   / .#!A %$B!&(   / 0 ##!D! $1$:(   5\"!*!% 0 ,&%*#? ' !\"%R\\ $)(R$ !",
        "\"$ !\"!(\" %   ! !\"$ \" $+!\"# !/\"D!`( EI#r32!*&&\"#!#$' &)8!9= !%!\"3 { \"\"",
        "% ! \"\"5 \"\"C \"\"% ! \"\"< Q \"\"aY.*W\"&#\u{81}\"1 ,%d#+') \".*.*.)  1MF!#$V",
        "H'#\"D !%b-6^4\"#)K&,G/+Ni!l79%Q4<$-KAE3 -E\"''3\" 3\" \"#$+xTz\"&\"=\"&\"( ! ! ",
        "! 6\"N % !#  %#\"\"&&)%  %U$>!4!<!*)#BU!&!\"0 !##(! ! ! \" +\"\"%#&!95\u{83}7 7 ",
        "t(\"#$8= !%!\"G'!*/+% % % % % % % %g!\u{7f} ;''#\"#&W(  j \"%3 k9;P.\u{80}\u{84}",
        "e\u{87}*\u{82}V[\"y#.-$27*6\"f5'\"n\"7_+   \" //!'M.LS&#! $)A-/;I'74!*# 0-# 5@  ",
        "(2/#!#L !#$\"#\"! !, \"+' 8&\"&\"&+% % 3 0-q6\u{86}8/&]\u{85}}\"oZ%8#%! 0 ) # ! ",
        "$ $ pX|:S\"OJ)G$, ;!(# u'!4,&! ,)H#&\"&\"&\" #$#$,",
    ),
);

/// Characters allowed after the first in an identifier (`Jp`).
pub const IDENTIFIER_PART: EncodedClass = EncodedClass::new(
    "Jp",
    &[
        2, 3, 0, 4, 5, 1, 6, 9, 7, 8, 12, 10, 11, 15, 13, 25, 14, 17, 19, 18, 21, 22, 48, 37,
        42, 26, 30, 40, 16, 20, 23, 27, 28, 31, 33, 35, 46, 54, 32, 38, 39, 53, 55, 57, 58, 62,
        67, 69, 73, 75, 85, 88, 24, 29, 34, 41, 43, 44, 45, 47, 50, 51, 52, 56, 59, 63, 64, 66,
        68, 72, 74, 77, 79, 82, 83, 89, 93, 100, 101, 102, 105, 107, 114, 115, 116, 122, 128,
        132, 134, 138, 165, 249, 268, 282, 321, 332, 362, 365, 457, 470, 619, 631, 727, 1133,
        1164, 6581, 8453, 11171, 20975,
    ],
    concat!(
        "\")&.'\"*')/$\" /$F!!$\")% \"#%   5 : \u{82}$,-#)\" \"3t %!! \"(\"   \" 2 i y #!",
        "z 7!\"(;(\" Y \" % % \"'9$!/\"$+&P$n (!' 3!\"1L!m-I$\"!62?$+E= (50 v!' 3 (!%!4 &",
        " \"#!!)!%!!'\"$% #!2 % \"!  $$%!4 & % % %!\" #$%! #\")! \")-*  )   4 & % #!'    ",
        "!\"<!!' \")&   (!%!4 & % #!)!%! '%$% #!' &,% $#  !#% \" %#%# #,$##  !!\"(\"-*(\"",
        "(*   5 -#(   !)%  &!!''& ! (   5 ' #!)   !)%)\" !!' %0! (   \\   #&-!3 $!% 1#> )",
        " \"!&#\"$$ \" (('!%0K$- ';% \"!% \"!\"(! &   \" \"!% *  !# \" $!'!!B\"T%(2 \" \"",
        " \"$' C$2 1 C+\"LP(g!7 \"&\"!8 \u{7f} !!& \" !!; !!F !!& \" !!0 _ !!c! +2#-1R!$#",
        "\u{84}!< /&f#+)* &*=*2.*   %.j#\"# !'('3 !'(S)8&O,: ,$,,H!#*X$/(+G?$M @!+('0\"'.",
        "NQ$'3).s.J''#6!))8! 1  7({ }!$!7!$!( \" \" \" :!^ & \"#  &#!!$$*&  &N%=\"@%!$&+(",
        "*#A1*$\"#,3\"$\"!' \"##(\" \" \" ! +!!&#$\" K\u{86}`h4\u{85}U\u{87}D D w()+\"!7 ",
        "\"&\"!J)\"<>+& & & & & & & & A6\"\u{83} 90 #!#$R!%!  k !&8 l#!,9E-B'A( 0B';0~",
        "\u{89}Q\u{8c}1\u{88}dZ!|#?4[$' rG)!o!DM6'$!\")].O,'(>#\" 6!C.@#b-+(: E+.!'(5#e/ ",
        "!-!#,$!$!$+& & 8 ',u %!'(\u{8b}.5$6\u{8a}\u{81}!pH&.#&, * # \" % % qV\u{80}2a!IW",
        "*#-1-#%/ 9\"(# x)\"*')/$\" /*S#$!$!$! #%#%/",
    ),
);

/// Horizontal whitespace, tab included (`Zh`, `Gh`).
pub const HORIZONTAL: EncodedClass = EncodedClass::new(
    "Zh",
    &[
        0, 9, 10, 23, 37, 48, 128, 2432, 4001, 5600,
    ],
    "! # & ) '\"$ % ( ",
);

/// Vertical whitespace, newline and carriage return included (`Zv`, `Gv`).
pub const VERTICAL: EncodedClass = EncodedClass::new(
    "Zv",
    &[
        0, 1, 3, 10, 120, 8099,
    ],
    "#\"$ %!",
);

/// All whitespace, the union of horizontal and vertical (`G`).
pub const SPACE: EncodedClass = EncodedClass::new(
    "G",
    &[
        0, 1, 4, 6, 9, 10, 19, 27, 30, 48, 101, 2432, 4001, 5600,
    ],
    "$\"& * ' - +%(!# ) , ",
);

/// Uppercase side of the single character case pairs, parallel to [`LOWER`].
///
/// The first 1035 pairs are the canonical ones (each side maps back to the other);
/// the rest are compatibility letters such as KELVIN SIGN or LONG S that fold
/// onto an existing lowercase letter. Lookups keep the first pairing of a
/// repeated key, so canonical pairs win.
pub const UPPER: &[u16] = &[
    0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B,
    0x004C, 0x004D, 0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056,
    0x0057, 0x0058, 0x0059, 0x005A, 0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6,
    0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF, 0x00D0, 0x00D1,
    0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD,
    0x00DE, 0x0100, 0x0102, 0x0104, 0x0106, 0x0108, 0x010A, 0x010C, 0x010E, 0x0110, 0x0112,
    0x0114, 0x0116, 0x0118, 0x011A, 0x011C, 0x011E, 0x0120, 0x0122, 0x0124, 0x0126, 0x0128,
    0x012A, 0x012C, 0x012E, 0x0132, 0x0134, 0x0136, 0x0139, 0x013B, 0x013D, 0x013F, 0x0141,
    0x0143, 0x0145, 0x0147, 0x014A, 0x014C, 0x014E, 0x0150, 0x0152, 0x0154, 0x0156, 0x0158,
    0x015A, 0x015C, 0x015E, 0x0160, 0x0162, 0x0164, 0x0166, 0x0168, 0x016A, 0x016C, 0x016E,
    0x0170, 0x0172, 0x0174, 0x0176, 0x0178, 0x0179, 0x017B, 0x017D, 0x0181, 0x0182, 0x0184,
    0x0186, 0x0187, 0x0189, 0x018A, 0x018B, 0x018E, 0x018F, 0x0190, 0x0191, 0x0193, 0x0194,
    0x0196, 0x0197, 0x0198, 0x019C, 0x019D, 0x019F, 0x01A0, 0x01A2, 0x01A4, 0x01A6, 0x01A7,
    0x01A9, 0x01AC, 0x01AE, 0x01AF, 0x01B1, 0x01B2, 0x01B3, 0x01B5, 0x01B7, 0x01B8, 0x01BC,
    0x01C4, 0x01C7, 0x01CA, 0x01CD, 0x01CF, 0x01D1, 0x01D3, 0x01D5, 0x01D7, 0x01D9, 0x01DB,
    0x01DE, 0x01E0, 0x01E2, 0x01E4, 0x01E6, 0x01E8, 0x01EA, 0x01EC, 0x01EE, 0x01F1, 0x01F4,
    0x01F6, 0x01F7, 0x01F8, 0x01FA, 0x01FC, 0x01FE, 0x0200, 0x0202, 0x0204, 0x0206, 0x0208,
    0x020A, 0x020C, 0x020E, 0x0210, 0x0212, 0x0214, 0x0216, 0x0218, 0x021A, 0x021C, 0x021E,
    0x0220, 0x0222, 0x0224, 0x0226, 0x0228, 0x022A, 0x022C, 0x022E, 0x0230, 0x0232, 0x023A,
    0x023B, 0x023D, 0x023E, 0x0241, 0x0243, 0x0244, 0x0245, 0x0246, 0x0248, 0x024A, 0x024C,
    0x024E, 0x0370, 0x0372, 0x0376, 0x037F, 0x0386, 0x0388, 0x0389, 0x038A, 0x038C, 0x038E,
    0x038F, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A,
    0x039B, 0x039C, 0x039D, 0x039E, 0x039F, 0x03A0, 0x03A1, 0x03A3, 0x03A4, 0x03A5, 0x03A6,
    0x03A7, 0x03A8, 0x03A9, 0x03AA, 0x03AB, 0x03CF, 0x03D8, 0x03DA, 0x03DC, 0x03DE, 0x03E0,
    0x03E2, 0x03E4, 0x03E6, 0x03E8, 0x03EA, 0x03EC, 0x03EE, 0x03F7, 0x03F9, 0x03FA, 0x03FD,
    0x03FE, 0x03FF, 0x0400, 0x0401, 0x0402, 0x0403, 0x0404, 0x0405, 0x0406, 0x0407, 0x0408,
    0x0409, 0x040A, 0x040B, 0x040C, 0x040D, 0x040E, 0x040F, 0x0410, 0x0411, 0x0412, 0x0413,
    0x0414, 0x0415, 0x0416, 0x0417, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E,
    0x041F, 0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425, 0x0426, 0x0427, 0x0428, 0x0429,
    0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F, 0x0460, 0x0462, 0x0464, 0x0466, 0x0468,
    0x046A, 0x046C, 0x046E, 0x0470, 0x0472, 0x0474, 0x0476, 0x0478, 0x047A, 0x047C, 0x047E,
    0x0480, 0x048A, 0x048C, 0x048E, 0x0490, 0x0492, 0x0494, 0x0496, 0x0498, 0x049A, 0x049C,
    0x049E, 0x04A0, 0x04A2, 0x04A4, 0x04A6, 0x04A8, 0x04AA, 0x04AC, 0x04AE, 0x04B0, 0x04B2,
    0x04B4, 0x04B6, 0x04B8, 0x04BA, 0x04BC, 0x04BE, 0x04C0, 0x04C1, 0x04C3, 0x04C5, 0x04C7,
    0x04C9, 0x04CB, 0x04CD, 0x04D0, 0x04D2, 0x04D4, 0x04D6, 0x04D8, 0x04DA, 0x04DC, 0x04DE,
    0x04E0, 0x04E2, 0x04E4, 0x04E6, 0x04E8, 0x04EA, 0x04EC, 0x04EE, 0x04F0, 0x04F2, 0x04F4,
    0x04F6, 0x04F8, 0x04FA, 0x04FC, 0x04FE, 0x0500, 0x0502, 0x0504, 0x0506, 0x0508, 0x050A,
    0x050C, 0x050E, 0x0510, 0x0512, 0x0514, 0x0516, 0x0518, 0x051A, 0x051C, 0x051E, 0x0520,
    0x0522, 0x0524, 0x0526, 0x0528, 0x052A, 0x052C, 0x052E, 0x0531, 0x0532, 0x0533, 0x0534,
    0x0535, 0x0536, 0x0537, 0x0538, 0x0539, 0x053A, 0x053B, 0x053C, 0x053D, 0x053E, 0x053F,
    0x0540, 0x0541, 0x0542, 0x0543, 0x0544, 0x0545, 0x0546, 0x0547, 0x0548, 0x0549, 0x054A,
    0x054B, 0x054C, 0x054D, 0x054E, 0x054F, 0x0550, 0x0551, 0x0552, 0x0553, 0x0554, 0x0555,
    0x0556, 0x10A0, 0x10A1, 0x10A2, 0x10A3, 0x10A4, 0x10A5, 0x10A6, 0x10A7, 0x10A8, 0x10A9,
    0x10AA, 0x10AB, 0x10AC, 0x10AD, 0x10AE, 0x10AF, 0x10B0, 0x10B1, 0x10B2, 0x10B3, 0x10B4,
    0x10B5, 0x10B6, 0x10B7, 0x10B8, 0x10B9, 0x10BA, 0x10BB, 0x10BC, 0x10BD, 0x10BE, 0x10BF,
    0x10C0, 0x10C1, 0x10C2, 0x10C3, 0x10C4, 0x10C5, 0x10C7, 0x10CD, 0x1C90, 0x1C91, 0x1C92,
    0x1C93, 0x1C94, 0x1C95, 0x1C96, 0x1C97, 0x1C98, 0x1C99, 0x1C9A, 0x1C9B, 0x1C9C, 0x1C9D,
    0x1C9E, 0x1C9F, 0x1CA0, 0x1CA1, 0x1CA2, 0x1CA3, 0x1CA4, 0x1CA5, 0x1CA6, 0x1CA7, 0x1CA8,
    0x1CA9, 0x1CAA, 0x1CAB, 0x1CAC, 0x1CAD, 0x1CAE, 0x1CAF, 0x1CB0, 0x1CB1, 0x1CB2, 0x1CB3,
    0x1CB4, 0x1CB5, 0x1CB6, 0x1CB7, 0x1CB8, 0x1CB9, 0x1CBA, 0x1CBD, 0x1CBE, 0x1CBF, 0x1E00,
    0x1E02, 0x1E04, 0x1E06, 0x1E08, 0x1E0A, 0x1E0C, 0x1E0E, 0x1E10, 0x1E12, 0x1E14, 0x1E16,
    0x1E18, 0x1E1A, 0x1E1C, 0x1E1E, 0x1E20, 0x1E22, 0x1E24, 0x1E26, 0x1E28, 0x1E2A, 0x1E2C,
    0x1E2E, 0x1E30, 0x1E32, 0x1E34, 0x1E36, 0x1E38, 0x1E3A, 0x1E3C, 0x1E3E, 0x1E40, 0x1E42,
    0x1E44, 0x1E46, 0x1E48, 0x1E4A, 0x1E4C, 0x1E4E, 0x1E50, 0x1E52, 0x1E54, 0x1E56, 0x1E58,
    0x1E5A, 0x1E5C, 0x1E5E, 0x1E60, 0x1E62, 0x1E64, 0x1E66, 0x1E68, 0x1E6A, 0x1E6C, 0x1E6E,
    0x1E70, 0x1E72, 0x1E74, 0x1E76, 0x1E78, 0x1E7A, 0x1E7C, 0x1E7E, 0x1E80, 0x1E82, 0x1E84,
    0x1E86, 0x1E88, 0x1E8A, 0x1E8C, 0x1E8E, 0x1E90, 0x1E92, 0x1E94, 0x1EA0, 0x1EA2, 0x1EA4,
    0x1EA6, 0x1EA8, 0x1EAA, 0x1EAC, 0x1EAE, 0x1EB0, 0x1EB2, 0x1EB4, 0x1EB6, 0x1EB8, 0x1EBA,
    0x1EBC, 0x1EBE, 0x1EC0, 0x1EC2, 0x1EC4, 0x1EC6, 0x1EC8, 0x1ECA, 0x1ECC, 0x1ECE, 0x1ED0,
    0x1ED2, 0x1ED4, 0x1ED6, 0x1ED8, 0x1EDA, 0x1EDC, 0x1EDE, 0x1EE0, 0x1EE2, 0x1EE4, 0x1EE6,
    0x1EE8, 0x1EEA, 0x1EEC, 0x1EEE, 0x1EF0, 0x1EF2, 0x1EF4, 0x1EF6, 0x1EF8, 0x1EFA, 0x1EFC,
    0x1EFE, 0x1F08, 0x1F09, 0x1F0A, 0x1F0B, 0x1F0C, 0x1F0D, 0x1F0E, 0x1F0F, 0x1F18, 0x1F19,
    0x1F1A, 0x1F1B, 0x1F1C, 0x1F1D, 0x1F28, 0x1F29, 0x1F2A, 0x1F2B, 0x1F2C, 0x1F2D, 0x1F2E,
    0x1F2F, 0x1F38, 0x1F39, 0x1F3A, 0x1F3B, 0x1F3C, 0x1F3D, 0x1F3E, 0x1F3F, 0x1F48, 0x1F49,
    0x1F4A, 0x1F4B, 0x1F4C, 0x1F4D, 0x1F59, 0x1F5B, 0x1F5D, 0x1F5F, 0x1F68, 0x1F69, 0x1F6A,
    0x1F6B, 0x1F6C, 0x1F6D, 0x1F6E, 0x1F6F, 0x1FB8, 0x1FB9, 0x1FBA, 0x1FBB, 0x1FC8, 0x1FC9,
    0x1FCA, 0x1FCB, 0x1FD8, 0x1FD9, 0x1FDA, 0x1FDB, 0x1FE8, 0x1FE9, 0x1FEA, 0x1FEB, 0x1FEC,
    0x1FF8, 0x1FF9, 0x1FFA, 0x1FFB, 0x2132, 0x2160, 0x2161, 0x2162, 0x2163, 0x2164, 0x2165,
    0x2166, 0x2167, 0x2168, 0x2169, 0x216A, 0x216B, 0x216C, 0x216D, 0x216E, 0x216F, 0x2183,
    0x24B6, 0x24B7, 0x24B8, 0x24B9, 0x24BA, 0x24BB, 0x24BC, 0x24BD, 0x24BE, 0x24BF, 0x24C0,
    0x24C1, 0x24C2, 0x24C3, 0x24C4, 0x24C5, 0x24C6, 0x24C7, 0x24C8, 0x24C9, 0x24CA, 0x24CB,
    0x24CC, 0x24CD, 0x24CE, 0x24CF, 0x2C00, 0x2C01, 0x2C02, 0x2C03, 0x2C04, 0x2C05, 0x2C06,
    0x2C07, 0x2C08, 0x2C09, 0x2C0A, 0x2C0B, 0x2C0C, 0x2C0D, 0x2C0E, 0x2C0F, 0x2C10, 0x2C11,
    0x2C12, 0x2C13, 0x2C14, 0x2C15, 0x2C16, 0x2C17, 0x2C18, 0x2C19, 0x2C1A, 0x2C1B, 0x2C1C,
    0x2C1D, 0x2C1E, 0x2C1F, 0x2C20, 0x2C21, 0x2C22, 0x2C23, 0x2C24, 0x2C25, 0x2C26, 0x2C27,
    0x2C28, 0x2C29, 0x2C2A, 0x2C2B, 0x2C2C, 0x2C2D, 0x2C2E, 0x2C60, 0x2C62, 0x2C63, 0x2C64,
    0x2C67, 0x2C69, 0x2C6B, 0x2C6D, 0x2C6E, 0x2C6F, 0x2C70, 0x2C72, 0x2C75, 0x2C7E, 0x2C7F,
    0x2C80, 0x2C82, 0x2C84, 0x2C86, 0x2C88, 0x2C8A, 0x2C8C, 0x2C8E, 0x2C90, 0x2C92, 0x2C94,
    0x2C96, 0x2C98, 0x2C9A, 0x2C9C, 0x2C9E, 0x2CA0, 0x2CA2, 0x2CA4, 0x2CA6, 0x2CA8, 0x2CAA,
    0x2CAC, 0x2CAE, 0x2CB0, 0x2CB2, 0x2CB4, 0x2CB6, 0x2CB8, 0x2CBA, 0x2CBC, 0x2CBE, 0x2CC0,
    0x2CC2, 0x2CC4, 0x2CC6, 0x2CC8, 0x2CCA, 0x2CCC, 0x2CCE, 0x2CD0, 0x2CD2, 0x2CD4, 0x2CD6,
    0x2CD8, 0x2CDA, 0x2CDC, 0x2CDE, 0x2CE0, 0x2CE2, 0x2CEB, 0x2CED, 0x2CF2, 0xA640, 0xA642,
    0xA644, 0xA646, 0xA648, 0xA64A, 0xA64C, 0xA64E, 0xA650, 0xA652, 0xA654, 0xA656, 0xA658,
    0xA65A, 0xA65C, 0xA65E, 0xA660, 0xA662, 0xA664, 0xA666, 0xA668, 0xA66A, 0xA66C, 0xA680,
    0xA682, 0xA684, 0xA686, 0xA688, 0xA68A, 0xA68C, 0xA68E, 0xA690, 0xA692, 0xA694, 0xA696,
    0xA698, 0xA69A, 0xA722, 0xA724, 0xA726, 0xA728, 0xA72A, 0xA72C, 0xA72E, 0xA732, 0xA734,
    0xA736, 0xA738, 0xA73A, 0xA73C, 0xA73E, 0xA740, 0xA742, 0xA744, 0xA746, 0xA748, 0xA74A,
    0xA74C, 0xA74E, 0xA750, 0xA752, 0xA754, 0xA756, 0xA758, 0xA75A, 0xA75C, 0xA75E, 0xA760,
    0xA762, 0xA764, 0xA766, 0xA768, 0xA76A, 0xA76C, 0xA76E, 0xA779, 0xA77B, 0xA77D, 0xA77E,
    0xA780, 0xA782, 0xA784, 0xA786, 0xA78B, 0xA78D, 0xA790, 0xA792, 0xA796, 0xA798, 0xA79A,
    0xA79C, 0xA79E, 0xA7A0, 0xA7A2, 0xA7A4, 0xA7A6, 0xA7A8, 0xA7AA, 0xA7AB, 0xA7AC, 0xA7AD,
    0xA7AE, 0xA7B0, 0xA7B1, 0xA7B2, 0xA7B3, 0xA7B4, 0xA7B6, 0xA7B8, 0xFF21, 0xFF22, 0xFF23,
    0xFF24, 0xFF25, 0xFF26, 0xFF27, 0xFF28, 0xFF29, 0xFF2A, 0xFF2B, 0xFF2C, 0xFF2D, 0xFF2E,
    0xFF2F, 0xFF30, 0xFF31, 0xFF32, 0xFF33, 0xFF34, 0xFF35, 0xFF36, 0xFF37, 0xFF38, 0xFF39,
    0xFF3A, 0x00B5, 0x017F, 0x01C5, 0x01C8, 0x01CB, 0x01F2, 0x0345, 0x03A3, 0x03D0, 0x03D1,
    0x03D5, 0x03D6, 0x03F0, 0x03F1, 0x03F4, 0x03F5, 0x13F8, 0x13F9, 0x13FA, 0x13FB, 0x13FC,
    0x13FD, 0x1C80, 0x1C81, 0x1C82, 0x1C83, 0x1C84, 0x1C85, 0x1C86, 0x1C87, 0x1C88, 0x1E9B,
    0x1FBE, 0x2126, 0x212A, 0x212B, 0xAB70, 0xAB71, 0xAB72, 0xAB73, 0xAB74, 0xAB75, 0xAB76,
    0xAB77, 0xAB78, 0xAB79, 0xAB7A, 0xAB7B, 0xAB7C, 0xAB7D, 0xAB7E, 0xAB7F, 0xAB80, 0xAB81,
    0xAB82, 0xAB83, 0xAB84, 0xAB85, 0xAB86, 0xAB87, 0xAB88, 0xAB89, 0xAB8A, 0xAB8B, 0xAB8C,
    0xAB8D, 0xAB8E, 0xAB8F, 0xAB90, 0xAB91, 0xAB92, 0xAB93, 0xAB94, 0xAB95, 0xAB96, 0xAB97,
    0xAB98, 0xAB99, 0xAB9A, 0xAB9B, 0xAB9C, 0xAB9D, 0xAB9E, 0xAB9F, 0xABA0, 0xABA1, 0xABA2,
    0xABA3, 0xABA4, 0xABA5, 0xABA6, 0xABA7, 0xABA8, 0xABA9, 0xABAA, 0xABAB, 0xABAC, 0xABAD,
    0xABAE, 0xABAF, 0xABB0, 0xABB1, 0xABB2, 0xABB3, 0xABB4, 0xABB5, 0xABB6, 0xABB7, 0xABB8,
    0xABB9, 0xABBA, 0xABBB, 0xABBC, 0xABBD, 0xABBE, 0xABBF, 0x1E9E, 0x1F88, 0x1F89, 0x1F8A,
    0x1F8B, 0x1F8C, 0x1F8D, 0x1F8E, 0x1F8F, 0x1F98, 0x1F99, 0x1F9A, 0x1F9B, 0x1F9C, 0x1F9D,
    0x1F9E, 0x1F9F, 0x1FA8, 0x1FA9, 0x1FAA, 0x1FAB, 0x1FAC, 0x1FAD, 0x1FAE, 0x1FAF, 0x1FBC,
    0x1FCC, 0x1FFC,
];

/// Lowercase side of the case pairs, parallel to [`UPPER`].
pub const LOWER: &[u16] = &[
    0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076,
    0x0077, 0x0078, 0x0079, 0x007A, 0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6,
    0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF, 0x00F0, 0x00F1,
    0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD,
    0x00FE, 0x0101, 0x0103, 0x0105, 0x0107, 0x0109, 0x010B, 0x010D, 0x010F, 0x0111, 0x0113,
    0x0115, 0x0117, 0x0119, 0x011B, 0x011D, 0x011F, 0x0121, 0x0123, 0x0125, 0x0127, 0x0129,
    0x012B, 0x012D, 0x012F, 0x0133, 0x0135, 0x0137, 0x013A, 0x013C, 0x013E, 0x0140, 0x0142,
    0x0144, 0x0146, 0x0148, 0x014B, 0x014D, 0x014F, 0x0151, 0x0153, 0x0155, 0x0157, 0x0159,
    0x015B, 0x015D, 0x015F, 0x0161, 0x0163, 0x0165, 0x0167, 0x0169, 0x016B, 0x016D, 0x016F,
    0x0171, 0x0173, 0x0175, 0x0177, 0x00FF, 0x017A, 0x017C, 0x017E, 0x0253, 0x0183, 0x0185,
    0x0254, 0x0188, 0x0256, 0x0257, 0x018C, 0x01DD, 0x0259, 0x025B, 0x0192, 0x0260, 0x0263,
    0x0269, 0x0268, 0x0199, 0x026F, 0x0272, 0x0275, 0x01A1, 0x01A3, 0x01A5, 0x0280, 0x01A8,
    0x0283, 0x01AD, 0x0288, 0x01B0, 0x028A, 0x028B, 0x01B4, 0x01B6, 0x0292, 0x01B9, 0x01BD,
    0x01C6, 0x01C9, 0x01CC, 0x01CE, 0x01D0, 0x01D2, 0x01D4, 0x01D6, 0x01D8, 0x01DA, 0x01DC,
    0x01DF, 0x01E1, 0x01E3, 0x01E5, 0x01E7, 0x01E9, 0x01EB, 0x01ED, 0x01EF, 0x01F3, 0x01F5,
    0x0195, 0x01BF, 0x01F9, 0x01FB, 0x01FD, 0x01FF, 0x0201, 0x0203, 0x0205, 0x0207, 0x0209,
    0x020B, 0x020D, 0x020F, 0x0211, 0x0213, 0x0215, 0x0217, 0x0219, 0x021B, 0x021D, 0x021F,
    0x019E, 0x0223, 0x0225, 0x0227, 0x0229, 0x022B, 0x022D, 0x022F, 0x0231, 0x0233, 0x2C65,
    0x023C, 0x019A, 0x2C66, 0x0242, 0x0180, 0x0289, 0x028C, 0x0247, 0x0249, 0x024B, 0x024D,
    0x024F, 0x0371, 0x0373, 0x0377, 0x03F3, 0x03AC, 0x03AD, 0x03AE, 0x03AF, 0x03CC, 0x03CD,
    0x03CE, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA,
    0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF, 0x03C0, 0x03C1, 0x03C3, 0x03C4, 0x03C5, 0x03C6,
    0x03C7, 0x03C8, 0x03C9, 0x03CA, 0x03CB, 0x03D7, 0x03D9, 0x03DB, 0x03DD, 0x03DF, 0x03E1,
    0x03E3, 0x03E5, 0x03E7, 0x03E9, 0x03EB, 0x03ED, 0x03EF, 0x03F8, 0x03F2, 0x03FB, 0x037B,
    0x037C, 0x037D, 0x0450, 0x0451, 0x0452, 0x0453, 0x0454, 0x0455, 0x0456, 0x0457, 0x0458,
    0x0459, 0x045A, 0x045B, 0x045C, 0x045D, 0x045E, 0x045F, 0x0430, 0x0431, 0x0432, 0x0433,
    0x0434, 0x0435, 0x0436, 0x0437, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E,
    0x043F, 0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446, 0x0447, 0x0448, 0x0449,
    0x044A, 0x044B, 0x044C, 0x044D, 0x044E, 0x044F, 0x0461, 0x0463, 0x0465, 0x0467, 0x0469,
    0x046B, 0x046D, 0x046F, 0x0471, 0x0473, 0x0475, 0x0477, 0x0479, 0x047B, 0x047D, 0x047F,
    0x0481, 0x048B, 0x048D, 0x048F, 0x0491, 0x0493, 0x0495, 0x0497, 0x0499, 0x049B, 0x049D,
    0x049F, 0x04A1, 0x04A3, 0x04A5, 0x04A7, 0x04A9, 0x04AB, 0x04AD, 0x04AF, 0x04B1, 0x04B3,
    0x04B5, 0x04B7, 0x04B9, 0x04BB, 0x04BD, 0x04BF, 0x04CF, 0x04C2, 0x04C4, 0x04C6, 0x04C8,
    0x04CA, 0x04CC, 0x04CE, 0x04D1, 0x04D3, 0x04D5, 0x04D7, 0x04D9, 0x04DB, 0x04DD, 0x04DF,
    0x04E1, 0x04E3, 0x04E5, 0x04E7, 0x04E9, 0x04EB, 0x04ED, 0x04EF, 0x04F1, 0x04F3, 0x04F5,
    0x04F7, 0x04F9, 0x04FB, 0x04FD, 0x04FF, 0x0501, 0x0503, 0x0505, 0x0507, 0x0509, 0x050B,
    0x050D, 0x050F, 0x0511, 0x0513, 0x0515, 0x0517, 0x0519, 0x051B, 0x051D, 0x051F, 0x0521,
    0x0523, 0x0525, 0x0527, 0x0529, 0x052B, 0x052D, 0x052F, 0x0561, 0x0562, 0x0563, 0x0564,
    0x0565, 0x0566, 0x0567, 0x0568, 0x0569, 0x056A, 0x056B, 0x056C, 0x056D, 0x056E, 0x056F,
    0x0570, 0x0571, 0x0572, 0x0573, 0x0574, 0x0575, 0x0576, 0x0577, 0x0578, 0x0579, 0x057A,
    0x057B, 0x057C, 0x057D, 0x057E, 0x057F, 0x0580, 0x0581, 0x0582, 0x0583, 0x0584, 0x0585,
    0x0586, 0x2D00, 0x2D01, 0x2D02, 0x2D03, 0x2D04, 0x2D05, 0x2D06, 0x2D07, 0x2D08, 0x2D09,
    0x2D0A, 0x2D0B, 0x2D0C, 0x2D0D, 0x2D0E, 0x2D0F, 0x2D10, 0x2D11, 0x2D12, 0x2D13, 0x2D14,
    0x2D15, 0x2D16, 0x2D17, 0x2D18, 0x2D19, 0x2D1A, 0x2D1B, 0x2D1C, 0x2D1D, 0x2D1E, 0x2D1F,
    0x2D20, 0x2D21, 0x2D22, 0x2D23, 0x2D24, 0x2D25, 0x2D27, 0x2D2D, 0x10D0, 0x10D1, 0x10D2,
    0x10D3, 0x10D4, 0x10D5, 0x10D6, 0x10D7, 0x10D8, 0x10D9, 0x10DA, 0x10DB, 0x10DC, 0x10DD,
    0x10DE, 0x10DF, 0x10E0, 0x10E1, 0x10E2, 0x10E3, 0x10E4, 0x10E5, 0x10E6, 0x10E7, 0x10E8,
    0x10E9, 0x10EA, 0x10EB, 0x10EC, 0x10ED, 0x10EE, 0x10EF, 0x10F0, 0x10F1, 0x10F2, 0x10F3,
    0x10F4, 0x10F5, 0x10F6, 0x10F7, 0x10F8, 0x10F9, 0x10FA, 0x10FD, 0x10FE, 0x10FF, 0x1E01,
    0x1E03, 0x1E05, 0x1E07, 0x1E09, 0x1E0B, 0x1E0D, 0x1E0F, 0x1E11, 0x1E13, 0x1E15, 0x1E17,
    0x1E19, 0x1E1B, 0x1E1D, 0x1E1F, 0x1E21, 0x1E23, 0x1E25, 0x1E27, 0x1E29, 0x1E2B, 0x1E2D,
    0x1E2F, 0x1E31, 0x1E33, 0x1E35, 0x1E37, 0x1E39, 0x1E3B, 0x1E3D, 0x1E3F, 0x1E41, 0x1E43,
    0x1E45, 0x1E47, 0x1E49, 0x1E4B, 0x1E4D, 0x1E4F, 0x1E51, 0x1E53, 0x1E55, 0x1E57, 0x1E59,
    0x1E5B, 0x1E5D, 0x1E5F, 0x1E61, 0x1E63, 0x1E65, 0x1E67, 0x1E69, 0x1E6B, 0x1E6D, 0x1E6F,
    0x1E71, 0x1E73, 0x1E75, 0x1E77, 0x1E79, 0x1E7B, 0x1E7D, 0x1E7F, 0x1E81, 0x1E83, 0x1E85,
    0x1E87, 0x1E89, 0x1E8B, 0x1E8D, 0x1E8F, 0x1E91, 0x1E93, 0x1E95, 0x1EA1, 0x1EA3, 0x1EA5,
    0x1EA7, 0x1EA9, 0x1EAB, 0x1EAD, 0x1EAF, 0x1EB1, 0x1EB3, 0x1EB5, 0x1EB7, 0x1EB9, 0x1EBB,
    0x1EBD, 0x1EBF, 0x1EC1, 0x1EC3, 0x1EC5, 0x1EC7, 0x1EC9, 0x1ECB, 0x1ECD, 0x1ECF, 0x1ED1,
    0x1ED3, 0x1ED5, 0x1ED7, 0x1ED9, 0x1EDB, 0x1EDD, 0x1EDF, 0x1EE1, 0x1EE3, 0x1EE5, 0x1EE7,
    0x1EE9, 0x1EEB, 0x1EED, 0x1EEF, 0x1EF1, 0x1EF3, 0x1EF5, 0x1EF7, 0x1EF9, 0x1EFB, 0x1EFD,
    0x1EFF, 0x1F00, 0x1F01, 0x1F02, 0x1F03, 0x1F04, 0x1F05, 0x1F06, 0x1F07, 0x1F10, 0x1F11,
    0x1F12, 0x1F13, 0x1F14, 0x1F15, 0x1F20, 0x1F21, 0x1F22, 0x1F23, 0x1F24, 0x1F25, 0x1F26,
    0x1F27, 0x1F30, 0x1F31, 0x1F32, 0x1F33, 0x1F34, 0x1F35, 0x1F36, 0x1F37, 0x1F40, 0x1F41,
    0x1F42, 0x1F43, 0x1F44, 0x1F45, 0x1F51, 0x1F53, 0x1F55, 0x1F57, 0x1F60, 0x1F61, 0x1F62,
    0x1F63, 0x1F64, 0x1F65, 0x1F66, 0x1F67, 0x1FB0, 0x1FB1, 0x1F70, 0x1F71, 0x1F72, 0x1F73,
    0x1F74, 0x1F75, 0x1FD0, 0x1FD1, 0x1F76, 0x1F77, 0x1FE0, 0x1FE1, 0x1F7A, 0x1F7B, 0x1FE5,
    0x1F78, 0x1F79, 0x1F7C, 0x1F7D, 0x214E, 0x2170, 0x2171, 0x2172, 0x2173, 0x2174, 0x2175,
    0x2176, 0x2177, 0x2178, 0x2179, 0x217A, 0x217B, 0x217C, 0x217D, 0x217E, 0x217F, 0x2184,
    0x24D0, 0x24D1, 0x24D2, 0x24D3, 0x24D4, 0x24D5, 0x24D6, 0x24D7, 0x24D8, 0x24D9, 0x24DA,
    0x24DB, 0x24DC, 0x24DD, 0x24DE, 0x24DF, 0x24E0, 0x24E1, 0x24E2, 0x24E3, 0x24E4, 0x24E5,
    0x24E6, 0x24E7, 0x24E8, 0x24E9, 0x2C30, 0x2C31, 0x2C32, 0x2C33, 0x2C34, 0x2C35, 0x2C36,
    0x2C37, 0x2C38, 0x2C39, 0x2C3A, 0x2C3B, 0x2C3C, 0x2C3D, 0x2C3E, 0x2C3F, 0x2C40, 0x2C41,
    0x2C42, 0x2C43, 0x2C44, 0x2C45, 0x2C46, 0x2C47, 0x2C48, 0x2C49, 0x2C4A, 0x2C4B, 0x2C4C,
    0x2C4D, 0x2C4E, 0x2C4F, 0x2C50, 0x2C51, 0x2C52, 0x2C53, 0x2C54, 0x2C55, 0x2C56, 0x2C57,
    0x2C58, 0x2C59, 0x2C5A, 0x2C5B, 0x2C5C, 0x2C5D, 0x2C5E, 0x2C61, 0x026B, 0x1D7D, 0x027D,
    0x2C68, 0x2C6A, 0x2C6C, 0x0251, 0x0271, 0x0250, 0x0252, 0x2C73, 0x2C76, 0x023F, 0x0240,
    0x2C81, 0x2C83, 0x2C85, 0x2C87, 0x2C89, 0x2C8B, 0x2C8D, 0x2C8F, 0x2C91, 0x2C93, 0x2C95,
    0x2C97, 0x2C99, 0x2C9B, 0x2C9D, 0x2C9F, 0x2CA1, 0x2CA3, 0x2CA5, 0x2CA7, 0x2CA9, 0x2CAB,
    0x2CAD, 0x2CAF, 0x2CB1, 0x2CB3, 0x2CB5, 0x2CB7, 0x2CB9, 0x2CBB, 0x2CBD, 0x2CBF, 0x2CC1,
    0x2CC3, 0x2CC5, 0x2CC7, 0x2CC9, 0x2CCB, 0x2CCD, 0x2CCF, 0x2CD1, 0x2CD3, 0x2CD5, 0x2CD7,
    0x2CD9, 0x2CDB, 0x2CDD, 0x2CDF, 0x2CE1, 0x2CE3, 0x2CEC, 0x2CEE, 0x2CF3, 0xA641, 0xA643,
    0xA645, 0xA647, 0xA649, 0xA64B, 0xA64D, 0xA64F, 0xA651, 0xA653, 0xA655, 0xA657, 0xA659,
    0xA65B, 0xA65D, 0xA65F, 0xA661, 0xA663, 0xA665, 0xA667, 0xA669, 0xA66B, 0xA66D, 0xA681,
    0xA683, 0xA685, 0xA687, 0xA689, 0xA68B, 0xA68D, 0xA68F, 0xA691, 0xA693, 0xA695, 0xA697,
    0xA699, 0xA69B, 0xA723, 0xA725, 0xA727, 0xA729, 0xA72B, 0xA72D, 0xA72F, 0xA733, 0xA735,
    0xA737, 0xA739, 0xA73B, 0xA73D, 0xA73F, 0xA741, 0xA743, 0xA745, 0xA747, 0xA749, 0xA74B,
    0xA74D, 0xA74F, 0xA751, 0xA753, 0xA755, 0xA757, 0xA759, 0xA75B, 0xA75D, 0xA75F, 0xA761,
    0xA763, 0xA765, 0xA767, 0xA769, 0xA76B, 0xA76D, 0xA76F, 0xA77A, 0xA77C, 0x1D79, 0xA77F,
    0xA781, 0xA783, 0xA785, 0xA787, 0xA78C, 0x0265, 0xA791, 0xA793, 0xA797, 0xA799, 0xA79B,
    0xA79D, 0xA79F, 0xA7A1, 0xA7A3, 0xA7A5, 0xA7A7, 0xA7A9, 0x0266, 0x025C, 0x0261, 0x026C,
    0x026A, 0x029E, 0x0287, 0x029D, 0xAB53, 0xA7B5, 0xA7B7, 0xA7B9, 0xFF41, 0xFF42, 0xFF43,
    0xFF44, 0xFF45, 0xFF46, 0xFF47, 0xFF48, 0xFF49, 0xFF4A, 0xFF4B, 0xFF4C, 0xFF4D, 0xFF4E,
    0xFF4F, 0xFF50, 0xFF51, 0xFF52, 0xFF53, 0xFF54, 0xFF55, 0xFF56, 0xFF57, 0xFF58, 0xFF59,
    0xFF5A, 0x03BC, 0x0073, 0x01C6, 0x01C9, 0x01CC, 0x01F3, 0x03B9, 0x03C2, 0x03B2, 0x03B8,
    0x03C6, 0x03C0, 0x03BA, 0x03C1, 0x03B8, 0x03B5, 0x13F0, 0x13F1, 0x13F2, 0x13F3, 0x13F4,
    0x13F5, 0x0432, 0x0434, 0x043E, 0x0441, 0x0442, 0x0442, 0x044A, 0x0463, 0xA64B, 0x1E61,
    0x03B9, 0x03C9, 0x006B, 0x00E5, 0x13A0, 0x13A1, 0x13A2, 0x13A3, 0x13A4, 0x13A5, 0x13A6,
    0x13A7, 0x13A8, 0x13A9, 0x13AA, 0x13AB, 0x13AC, 0x13AD, 0x13AE, 0x13AF, 0x13B0, 0x13B1,
    0x13B2, 0x13B3, 0x13B4, 0x13B5, 0x13B6, 0x13B7, 0x13B8, 0x13B9, 0x13BA, 0x13BB, 0x13BC,
    0x13BD, 0x13BE, 0x13BF, 0x13C0, 0x13C1, 0x13C2, 0x13C3, 0x13C4, 0x13C5, 0x13C6, 0x13C7,
    0x13C8, 0x13C9, 0x13CA, 0x13CB, 0x13CC, 0x13CD, 0x13CE, 0x13CF, 0x13D0, 0x13D1, 0x13D2,
    0x13D3, 0x13D4, 0x13D5, 0x13D6, 0x13D7, 0x13D8, 0x13D9, 0x13DA, 0x13DB, 0x13DC, 0x13DD,
    0x13DE, 0x13DF, 0x13E0, 0x13E1, 0x13E2, 0x13E3, 0x13E4, 0x13E5, 0x13E6, 0x13E7, 0x13E8,
    0x13E9, 0x13EA, 0x13EB, 0x13EC, 0x13ED, 0x13EE, 0x13EF, 0x00DF, 0x1F80, 0x1F81, 0x1F82,
    0x1F83, 0x1F84, 0x1F85, 0x1F86, 0x1F87, 0x1F90, 0x1F91, 0x1F92, 0x1F93, 0x1F94, 0x1F95,
    0x1F96, 0x1F97, 0x1FA0, 0x1FA1, 0x1FA2, 0x1FA3, 0x1FA4, 0x1FA5, 0x1FA6, 0x1FA7, 0x1FB3,
    0x1FC3, 0x1FF3,
];

/// Opening brackets, parallel to [`CLOSERS`]. `<` is included on purpose.
pub const OPENERS: &[u16] = &[
    0x0028, 0x003C, 0x005B, 0x007B, 0x0F3A, 0x0F3C, 0x169B, 0x2045, 0x207D, 0x208D, 0x2308,
    0x230A, 0x2329, 0x2768, 0x276A, 0x276C, 0x276E, 0x2770, 0x2772, 0x2774, 0x27C5, 0x27E6,
    0x27E8, 0x27EA, 0x27EC, 0x27EE, 0x2983, 0x2985, 0x2987, 0x2989, 0x298B, 0x298D, 0x298F,
    0x2991, 0x2993, 0x2995, 0x2997, 0x29D8, 0x29DA, 0x29FC, 0x2E22, 0x2E24, 0x2E26, 0x2E28,
    0x3008, 0x300A, 0x300C, 0x300E, 0x3010, 0x3014, 0x3016, 0x3018, 0x301A, 0x301D, 0xFD3F,
    0xFE17, 0xFE35, 0xFE37, 0xFE39, 0xFE3B, 0xFE3D, 0xFE3F, 0xFE41, 0xFE43, 0xFE47, 0xFE59,
    0xFE5B, 0xFE5D, 0xFF08, 0xFF3B, 0xFF5B, 0xFF5F, 0xFF62,
];

/// Closing brackets, parallel to [`OPENERS`].
pub const CLOSERS: &[u16] = &[
    0x0029, 0x003E, 0x005D, 0x007D, 0x0F3B, 0x0F3D, 0x169C, 0x2046, 0x207E, 0x208E, 0x2309,
    0x230B, 0x232A, 0x2769, 0x276B, 0x276D, 0x276F, 0x2771, 0x2773, 0x2775, 0x27C6, 0x27E7,
    0x27E9, 0x27EB, 0x27ED, 0x27EF, 0x2984, 0x2986, 0x2988, 0x298A, 0x298C, 0x298E, 0x2990,
    0x2992, 0x2994, 0x2996, 0x2998, 0x29D9, 0x29DB, 0x29FD, 0x2E23, 0x2E25, 0x2E27, 0x2E29,
    0x3009, 0x300B, 0x300D, 0x300F, 0x3011, 0x3015, 0x3017, 0x3019, 0x301B, 0x301E, 0xFD3E,
    0xFE18, 0xFE36, 0xFE38, 0xFE3A, 0xFE3C, 0xFE3E, 0xFE40, 0xFE42, 0xFE44, 0xFE48, 0xFE5A,
    0xFE5C, 0xFE5E, 0xFF09, 0xFF3D, 0xFF5D, 0xFF60, 0xFF63,
];
